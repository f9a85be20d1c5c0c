pub mod config;
pub mod emoji;
pub mod glyph;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod style;
pub mod syntax;
pub mod transform;

pub use config::Config;
pub use config::ConfigBuilder;
pub use glyph::Style;
pub use pipeline::{DisplayTree, Html, MarkdownText, Pipeline, Sink};
pub use render::DisplayNode;
pub use syntax::SyntaxNode;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a markdown document into its lossless syntax tree.
///
/// No rewriting happens here: `parse(input, None).text()` is `input`.
pub fn parse(input: &str, config: Option<Config>) -> SyntaxNode {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    parser::MarkdownParser::new(input, &config.extensions).parse()
}

/// Rewrites emphasis, strong and code content of a markdown document into
/// styled Unicode glyphs and returns the regenerated markdown.
///
/// # Examples
///
/// ```no_run
/// let cfg = glyphmark::ConfigBuilder::default().emoji(false).build();
///
/// let out = glyphmark::convert("**bold** and `code`", Some(cfg));
/// assert_eq!(out, "**𝐛𝐨𝐥𝐝** and `𝚌𝚘𝚍𝚎`");
/// ```
///
/// # Arguments
///
/// * `input` - The markdown source
/// * `config` - Optional configuration (defaults to default config)
pub fn convert(input: &str, config: Option<Config>) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    Pipeline::new(config.unwrap_or_default()).run(Some(input), &MarkdownText)
}

/// Converts a markdown document and renders the result to HTML, honoring the
/// render options of `config`.
pub fn render_html(input: &str, config: Option<Config>) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    Pipeline::new(config.unwrap_or_default()).run(Some(input), &Html)
}

/// Converts a markdown document and returns its display tree.
pub fn display_tree(input: &str, config: Option<Config>) -> DisplayNode {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    Pipeline::new(config.unwrap_or_default()).run(Some(input), &DisplayTree)
}
