//! Lossless syntax tree for markdown documents.
//!
//! Every byte of the source is owned by exactly one token, so `tree.text()`
//! reproduces the input. Content lives in [`SyntaxKind::TEXT`] and
//! [`SyntaxKind::CODE_TEXT`] tokens; everything else (delimiters, fences,
//! pipes, link destinations, indentation) is markup.

mod kind;

pub use kind::{MarkdownLanguage, SyntaxKind};

use rowan::{GreenNode, GreenToken, NodeOrToken};

pub type SyntaxNode = rowan::SyntaxNode<MarkdownLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<MarkdownLanguage>;

/// Structural role of a tree element, as seen by the glyph transform.
///
/// This is a closed classification of [`SyntaxKind`]: kinds the transform
/// has no special knowledge of are carried in [`NodeKind::Other`] and pass
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Paragraph,
    Text,
    Emphasis,
    Strong,
    Delete,
    Code,
    InlineCode,
    Link,
    List,
    ListItem,
    Table,
    Other(SyntaxKind),
}

impl From<SyntaxKind> for NodeKind {
    fn from(kind: SyntaxKind) -> Self {
        match kind {
            SyntaxKind::ROOT => NodeKind::Root,
            SyntaxKind::PARAGRAPH => NodeKind::Paragraph,
            SyntaxKind::TEXT => NodeKind::Text,
            SyntaxKind::EMPHASIS => NodeKind::Emphasis,
            SyntaxKind::STRONG => NodeKind::Strong,
            SyntaxKind::STRIKETHROUGH => NodeKind::Delete,
            SyntaxKind::CODE_BLOCK => NodeKind::Code,
            SyntaxKind::INLINE_CODE => NodeKind::InlineCode,
            SyntaxKind::LINK => NodeKind::Link,
            SyntaxKind::LIST => NodeKind::List,
            SyntaxKind::LIST_ITEM => NodeKind::ListItem,
            SyntaxKind::TABLE => NodeKind::Table,
            other => NodeKind::Other(other),
        }
    }
}

/// Rebuild `node`, replacing the text of every token for which `rewrite`
/// returns a new value. Kinds and child order are preserved.
pub(crate) fn rewrite_tokens<F>(node: &SyntaxNode, rewrite: &mut F) -> GreenNode
where
    F: FnMut(&SyntaxToken) -> Option<String>,
{
    let mut children = Vec::new();
    for element in node.children_with_tokens() {
        match element {
            NodeOrToken::Node(child) => {
                children.push(NodeOrToken::Node(rewrite_tokens(&child, &mut *rewrite)));
            }
            NodeOrToken::Token(token) => {
                let green = match rewrite(&token) {
                    Some(text) => GreenToken::new(token.kind().into(), &text),
                    None => token.green().to_owned(),
                };
                children.push(NodeOrToken::Token(green));
            }
        }
    }
    GreenNode::new(node.kind().into(), children)
}
