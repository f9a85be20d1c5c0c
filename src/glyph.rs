//! Codepoint mapping from plain Latin letters and digits to the styled
//! letterforms of the Mathematical Alphanumeric Symbols block.

use std::borrow::Cow;

/// Visual style a run of text is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// No substitution.
    #[default]
    None,
    Bold,
    Italic,
    BoldItalic,
    Monospace,
}

/// A contiguous source range and the offset added to its codepoints.
#[derive(Debug, Clone, Copy)]
struct Span {
    first: char,
    last: char,
    offset: u32,
}

const fn span(first: char, last: char, offset: u32) -> Span {
    Span {
        first,
        last,
        offset,
    }
}

// Bold digits live at U+1D7CE..=U+1D7D7. Adding 55301 instead would land in
// the surrogate range, which no `char` can hold.
const BOLD: &[Span] = &[
    span('a', 'z', 119_737),
    span('A', 'Z', 119_743),
    span('0', '9', 120_734),
];
const ITALIC: &[Span] = &[span('a', 'z', 119_789), span('A', 'Z', 119_795)];
const BOLD_ITALIC: &[Span] = &[span('a', 'z', 120_309), span('A', 'Z', 120_315)];
const MONOSPACE: &[Span] = &[span('a', 'z', 120_361), span('A', 'Z', 120_367)];

impl Style {
    fn spans(self) -> &'static [Span] {
        match self {
            Style::None => &[],
            Style::Bold => BOLD,
            Style::Italic => ITALIC,
            Style::BoldItalic => BOLD_ITALIC,
            Style::Monospace => MONOSPACE,
        }
    }
}

/// Map a single character to its styled counterpart.
///
/// Characters outside the style's source ranges are returned unchanged.
pub fn map_char(c: char, style: Style) -> char {
    style
        .spans()
        .iter()
        .find(|s| (s.first..=s.last).contains(&c))
        .and_then(|s| char::from_u32(c as u32 + s.offset))
        .unwrap_or(c)
}

/// Map a string holding exactly one scalar value.
///
/// Anything else (empty input, combining sequences, several characters) is
/// returned as is; sequences are never split apart here.
pub fn map_scalar(s: &str, style: Style) -> Cow<'_, str> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            let mapped = map_char(c, style);
            if mapped == c {
                Cow::Borrowed(s)
            } else {
                Cow::Owned(mapped.to_string())
            }
        }
        _ => Cow::Borrowed(s),
    }
}

/// Map every character of `text` under `style`.
pub fn map_text(text: &str, style: Style) -> String {
    text.chars().map(|c| map_char(c, style)).collect()
}
