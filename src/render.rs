//! Display outputs for a transformed tree: an mdast-like display tree for
//! handing to a front-end renderer, and sanitized HTML.

use pulldown_cmark::{Event, Parser, Tag, html};
use rowan::NodeOrToken;
use serde::Serialize;

use crate::config::{Extensions, RenderOptions};
use crate::syntax::{SyntaxKind, SyntaxNode, SyntaxToken};

/// A node of the display tree.
///
/// Node kinds and nesting follow the syntax tree; markup tokens are dropped
/// and adjacent text is merged into `text` leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNode {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            value: None,
            depth: None,
            ordered: None,
            start: None,
            checked: None,
            url: None,
            title: None,
            lang: None,
            children: Vec::new(),
        }
    }

    fn leaf(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(kind)
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn plain_text(&self) -> String {
        let mut out = self.value.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.plain_text());
        }
        out
    }
}

fn type_name(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::ROOT => "root",
        SyntaxKind::PARAGRAPH => "paragraph",
        SyntaxKind::HEADING => "heading",
        SyntaxKind::BLOCKQUOTE => "blockquote",
        SyntaxKind::CODE_BLOCK => "code",
        SyntaxKind::HTML_BLOCK => "html",
        SyntaxKind::LIST => "list",
        SyntaxKind::LIST_ITEM => "listItem",
        SyntaxKind::FOOTNOTE_DEFINITION => "footnoteDefinition",
        SyntaxKind::TABLE => "table",
        SyntaxKind::TABLE_HEAD | SyntaxKind::TABLE_ROW => "tableRow",
        SyntaxKind::TABLE_CELL => "tableCell",
        SyntaxKind::EMPHASIS => "emphasis",
        SyntaxKind::STRONG => "strong",
        SyntaxKind::STRIKETHROUGH => "delete",
        SyntaxKind::INLINE_CODE => "inlineCode",
        SyntaxKind::LINK => "link",
        SyntaxKind::IMAGE => "image",
        _ => "other",
    }
}

/// Build the display tree of `tree`.
pub fn display_tree(tree: &SyntaxNode, options: &RenderOptions) -> DisplayNode {
    build(tree, options).unwrap_or_else(|| DisplayNode::new("root"))
}

fn build(node: &SyntaxNode, options: &RenderOptions) -> Option<DisplayNode> {
    let kind = node.kind();
    let mut display = DisplayNode::new(type_name(kind));

    match kind {
        SyntaxKind::HTML_BLOCK if options.skip_html => return None,
        SyntaxKind::HTML_BLOCK => {
            display.value = Some(node.text().to_string());
            return Some(display);
        }
        SyntaxKind::INLINE_CODE => {
            display.value = Some(inline_code_value(&code_text(node)));
            return Some(display);
        }
        SyntaxKind::CODE_BLOCK => {
            display.value = Some(code_text(node));
            display.lang = fence_lang(node);
            return Some(display);
        }
        SyntaxKind::IMAGE => {
            let (url, title) = link_target(node);
            display.url = url;
            display.title = title;
            let mut parts = Vec::new();
            let tail = build_children(node, options, &mut parts);
            let mut alt: String = parts.iter().map(DisplayNode::plain_text).collect();
            alt.push_str(tail.as_deref().unwrap_or_default());
            display.value = Some(alt);
            return Some(display);
        }
        SyntaxKind::HEADING => display.depth = heading_depth(node),
        SyntaxKind::LIST => {
            let start = list_start(node);
            display.ordered = Some(start.is_some());
            display.start = start;
        }
        SyntaxKind::LIST_ITEM => display.checked = task_state(node),
        SyntaxKind::LINK => {
            let (url, title) = link_target(node);
            display.url = url;
            display.title = title;
        }
        _ => {}
    }

    let trailing = build_children(node, options, &mut display.children);
    if let Some(text) = trailing {
        display.children.push(DisplayNode::leaf("text", text));
    }
    Some(display)
}

/// Append the children of `node` to `out`, returning text that has not been
/// flushed into a leaf yet.
fn build_children(
    node: &SyntaxNode,
    options: &RenderOptions,
    out: &mut Vec<DisplayNode>,
) -> Option<String> {
    fn flush(text: &mut String, out: &mut Vec<DisplayNode>) {
        if !text.is_empty() {
            out.push(DisplayNode::leaf("text", std::mem::take(text)));
        }
    }

    let mut text = String::new();

    for element in node.children_with_tokens() {
        match element {
            NodeOrToken::Node(child) => {
                flush(&mut text, out);
                if let Some(child) = build(&child, options) {
                    out.push(child);
                }
            }
            NodeOrToken::Token(token) => match token.kind() {
                SyntaxKind::TEXT => text.push_str(token.text()),
                SyntaxKind::ESCAPED => text.push_str(&decode(token.text())),
                SyntaxKind::SOFT_BREAK => text.push('\n'),
                SyntaxKind::HARD_BREAK => {
                    flush(&mut text, out);
                    out.push(DisplayNode::new("break"));
                }
                SyntaxKind::THEMATIC_BREAK => {
                    flush(&mut text, out);
                    out.push(DisplayNode::new("thematicBreak"));
                }
                SyntaxKind::HTML if !options.skip_html => {
                    flush(&mut text, out);
                    out.push(DisplayNode::leaf("html", token.text()));
                }
                SyntaxKind::FOOTNOTE_REF => {
                    flush(&mut text, out);
                    let label = token.text().trim_start_matches("[^").trim_end_matches(']');
                    out.push(DisplayNode::leaf("footnoteReference", label));
                }
                _ => {}
            },
        }
    }

    (!text.is_empty()).then_some(text)
}

fn tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens().filter_map(|el| el.into_token())
}

fn code_text(node: &SyntaxNode) -> String {
    tokens(node)
        .filter(|t| t.kind() == SyntaxKind::CODE_TEXT)
        .map(|t| t.text().to_string())
        .collect()
}

/// Line endings become spaces, and one space of padding is stripped from
/// both sides when the content is not all spaces.
fn inline_code_value(raw: &str) -> String {
    let value = raw.replace("\r\n", " ").replace('\n', " ");
    if value.len() > 2 && value.starts_with(' ') && value.ends_with(' ') && !value.trim().is_empty()
    {
        value[1..value.len() - 1].to_string()
    } else {
        value
    }
}

fn fence_lang(node: &SyntaxNode) -> Option<String> {
    let first_line: String = tokens(node)
        .take_while(|t| !matches!(t.kind(), SyntaxKind::NEWLINE | SyntaxKind::CODE_TEXT))
        .map(|t| t.text().to_string())
        .collect();
    let trimmed = first_line.trim_start();
    let info = trimmed.trim_start_matches(['`', '~']);
    if info.len() == trimmed.len() {
        return None;
    }
    info.split_whitespace().next().map(str::to_string)
}

fn heading_depth(node: &SyntaxNode) -> Option<u8> {
    let markers: Vec<SyntaxToken> = tokens(node)
        .filter(|t| t.kind() == SyntaxKind::MARKUP)
        .collect();
    if let Some(first) = markers.first()
        && first.text().starts_with('#')
    {
        let level = first.text().chars().take_while(|&c| c == '#').count();
        return u8::try_from(level).ok();
    }
    markers
        .last()
        .map(|underline| if underline.text().starts_with('=') { 1 } else { 2 })
}

/// Start number of an ordered list, `None` for bullet lists.
fn list_start(node: &SyntaxNode) -> Option<u64> {
    let item = node.children().find(|c| c.kind() == SyntaxKind::LIST_ITEM)?;
    let marker = tokens(&item).find(|t| t.kind() == SyntaxKind::MARKUP)?;
    let digits: String = marker
        .text()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn task_state(item: &SyntaxNode) -> Option<bool> {
    item.descendants_with_tokens()
        .filter_map(|el| el.into_token())
        .find(|t| {
            t.kind() == SyntaxKind::TASK_MARKER
                && t.parent_ancestors()
                    .find(|a| a.kind() == SyntaxKind::LIST_ITEM)
                    .as_ref()
                    == Some(item)
        })
        .map(|t| t.text().contains(['x', 'X']))
}

/// Destination and title of an inline link or image. Reference links whose
/// definition lives elsewhere in the document have no target here.
fn link_target(node: &SyntaxNode) -> (Option<String>, Option<String>) {
    let source = node.text().to_string();
    for event in Parser::new(&source) {
        if let Event::Start(
            Tag::Link {
                dest_url, title, ..
            }
            | Tag::Image {
                dest_url, title, ..
            },
        ) = event
        {
            let title = (!title.is_empty()).then(|| title.to_string());
            return (Some(dest_url.to_string()), title);
        }
    }
    (None, None)
}

/// Decoded value of an entity or escape sequence.
fn decode(source: &str) -> String {
    let mut out = String::new();
    for event in Parser::new(source) {
        if let Event::Text(text) = event {
            out.push_str(&text);
        }
    }
    out
}

/// Render `tree` to HTML.
///
/// The tree's text is handed to pulldown-cmark's HTML writer; raw HTML is
/// dropped when `skip_html` is set and the result is passed through `ammonia`
/// when `sanitize` is set.
pub fn to_html(tree: &SyntaxNode, extensions: &Extensions, options: &RenderOptions) -> String {
    let source = tree.text().to_string();
    let events = Parser::new_ext(&source, extensions.parser_options()).filter(|event| {
        !(options.skip_html && matches!(event, Event::Html(_) | Event::InlineHtml(_)))
    });

    let mut out = String::new();
    html::push_html(&mut out, events);

    if options.sanitize {
        log::debug!("Sanitizing {} bytes of HTML", out.len());
        ammonia::clean(&out)
    } else {
        out
    }
}
