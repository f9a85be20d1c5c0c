//! Rewrites emphasis, strong and code content into styled Unicode glyphs.

use rowan::{GreenNode, GreenToken, NodeOrToken};

use crate::glyph::{self, Style};
use crate::style::resolve;
use crate::syntax::{NodeKind, SyntaxKind, SyntaxNode, SyntaxToken};

/// Apply glyph substitution to a document tree.
///
/// Returns a new tree with the same shape: only the text of `TEXT` tokens
/// directly under strong/emphasis nodes and of `CODE_TEXT` tokens under code
/// nodes changes. Already-substituted glyphs are outside every source range,
/// so running this twice gives the same result as running it once.
pub fn transform(tree: &SyntaxNode) -> SyntaxNode {
    let mut ancestors = Vec::new();
    let green = visit(tree, &mut ancestors);
    debug_assert!(ancestors.is_empty());
    SyntaxNode::new_root(green)
}

fn visit(node: &SyntaxNode, ancestors: &mut Vec<NodeKind>) -> GreenNode {
    let kind = NodeKind::from(node.kind());
    let (style, target) = match kind {
        NodeKind::Code | NodeKind::InlineCode => (Style::Monospace, SyntaxKind::CODE_TEXT),
        NodeKind::Strong | NodeKind::Emphasis => (resolve(kind, ancestors), SyntaxKind::TEXT),
        NodeKind::Root
        | NodeKind::Paragraph
        | NodeKind::Text
        | NodeKind::Delete
        | NodeKind::Link
        | NodeKind::List
        | NodeKind::ListItem
        | NodeKind::Table
        | NodeKind::Other(_) => (Style::None, SyntaxKind::TEXT),
    };

    ancestors.push(kind);
    let mut children = Vec::new();
    for element in node.children_with_tokens() {
        match element {
            NodeOrToken::Node(child) => children.push(NodeOrToken::Node(visit(&child, ancestors))),
            NodeOrToken::Token(token) => {
                children.push(NodeOrToken::Token(restyle(&token, target, style)));
            }
        }
    }
    ancestors.pop();

    GreenNode::new(node.kind().into(), children)
}

fn restyle(token: &SyntaxToken, target: SyntaxKind, style: Style) -> GreenToken {
    if style == Style::None || token.kind() != target {
        return token.green().to_owned();
    }
    GreenToken::new(token.kind().into(), &glyph::map_text(token.text(), style))
}
