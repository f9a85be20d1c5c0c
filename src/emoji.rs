//! Emoji shortcode expansion and lookup, backed by the `emojis` dictionary.

use std::borrow::Cow;
use std::sync::LazyLock;

use emojis::Emoji;
use regex::Regex;

use crate::syntax::{SyntaxKind, SyntaxNode, SyntaxToken, rewrite_tokens};

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([\w+-]+):").expect("shortcode pattern is valid"));

/// Replace every known `:shortcode:` in `text` with its emoji.
/// Unknown shortcodes are left as typed.
pub fn expand_text(text: &str) -> Cow<'_, str> {
    let mut out = String::new();
    let mut last = 0;
    for caps in SHORTCODE.captures_iter(text) {
        let (Some(whole), Some(emoji)) = (caps.get(0), emojis::get_by_shortcode(&caps[1])) else {
            continue;
        };
        out.push_str(&text[last..whole.start()]);
        out.push_str(emoji.as_str());
        last = whole.end();
    }
    if last == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

/// Expand shortcodes in the plain text of a document tree.
///
/// Only `TEXT` tokens are touched, so code, link destinations and raw HTML
/// keep their colons.
pub fn expand_shortcodes(tree: &SyntaxNode) -> SyntaxNode {
    let mut expanded = 0usize;
    let green = rewrite_tokens(tree, &mut |token: &SyntaxToken| {
        if token.kind() != SyntaxKind::TEXT {
            return None;
        }
        match expand_text(token.text()) {
            Cow::Owned(text) => {
                expanded += 1;
                Some(text)
            }
            Cow::Borrowed(_) => None,
        }
    });
    if expanded > 0 {
        log::debug!("Expanded emoji shortcodes in {expanded} text tokens");
    }
    SyntaxNode::new_root(green)
}

/// Case-insensitive substring search over emoji names and shortcodes, in
/// dictionary order. An empty query lists every emoji.
pub fn search(query: &str) -> Vec<&'static Emoji> {
    let query = query.trim().to_lowercase();
    emojis::iter()
        .filter(|emoji| {
            emoji.name().to_lowercase().contains(&query)
                || emoji.shortcodes().any(|code| code.contains(&query))
        })
        .collect()
}
