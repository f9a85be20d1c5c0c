use crate::glyph::Style;
use crate::syntax::NodeKind;

/// Decide the style of a node's own text from its kind and its ancestors.
///
/// Only emphasis and strong ancestors matter, anywhere up the chain. Nesting
/// deeper than one emphasis inside one strong (or the reverse) still resolves
/// to [`Style::BoldItalic`].
pub fn resolve(kind: NodeKind, ancestors: &[NodeKind]) -> Style {
    match kind {
        NodeKind::Strong if ancestors.contains(&NodeKind::Emphasis) => Style::BoldItalic,
        NodeKind::Strong => Style::Bold,
        NodeKind::Emphasis if ancestors.contains(&NodeKind::Strong) => Style::BoldItalic,
        NodeKind::Emphasis => Style::Italic,
        NodeKind::Code | NodeKind::InlineCode => Style::Monospace,
        NodeKind::Root
        | NodeKind::Paragraph
        | NodeKind::Text
        | NodeKind::Delete
        | NodeKind::Link
        | NodeKind::List
        | NodeKind::ListItem
        | NodeKind::Table
        | NodeKind::Other(_) => Style::None,
    }
}
