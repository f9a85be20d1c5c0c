use wasm_bindgen::prelude::*;

fn config(emoji: Option<bool>) -> glyphmark::Config {
    glyphmark::ConfigBuilder::default()
        .emoji(emoji.unwrap_or(true))
        .build()
}

/// Markdown with emphasis and code rewritten to styled glyphs. A missing
/// document converts to the empty string.
#[wasm_bindgen]
pub fn convert(input: Option<String>, emoji: Option<bool>) -> String {
    glyphmark::Pipeline::new(config(emoji)).run(input.as_deref(), &glyphmark::MarkdownText)
}

#[wasm_bindgen]
pub fn render_html(input: Option<String>, emoji: Option<bool>) -> String {
    glyphmark::Pipeline::new(config(emoji)).run(input.as_deref(), &glyphmark::Html)
}

/// The display tree as JSON, for front ends that render it themselves.
#[wasm_bindgen]
pub fn display_tree_json(input: Option<String>, emoji: Option<bool>) -> Result<String, JsError> {
    let tree =
        glyphmark::Pipeline::new(config(emoji)).run(input.as_deref(), &glyphmark::DisplayTree);
    Ok(serde_json::to_string(&tree)?)
}

/// Emoji matching `query`, as `[emoji, shortcode]` pairs. Inserting
/// `:shortcode:` into a document expands back to the emoji; an empty query
/// lists the whole dictionary.
#[wasm_bindgen]
pub fn search_emoji(query: Option<String>) -> Result<String, JsError> {
    Ok(serde_json::to_string(&emoji_completions(query.as_deref()))?)
}

fn emoji_completions(query: Option<&str>) -> Vec<(&'static str, &'static str)> {
    glyphmark::emoji::search(query.unwrap_or_default())
        .into_iter()
        .filter_map(|emoji| Some((emoji.as_str(), emoji.shortcode()?)))
        .collect()
}
