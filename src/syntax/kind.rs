//! Syntax kinds and language definition for the lossless markdown tree.

use rowan::Language;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    WHITESPACE = 0,
    NEWLINE,
    TEXT,                 // plain text content
    ESCAPED,              // text whose source spelling differs from its value (entities)
    CODE_TEXT,            // content of inline code and code blocks
    MARKUP,               // any other source punctuation (list markers, pipes, fences, urls)
    EMPHASIS_MARKER,      // * or _
    STRONG_MARKER,        // ** or __
    STRIKETHROUGH_MARKER, // ~~
    CODE_MARKER,          // ` or `` around inline code
    SOFT_BREAK,
    HARD_BREAK,
    THEMATIC_BREAK, // --- or *** or ___
    HTML,           // raw inline or block html
    TASK_MARKER,    // [ ] or [x]
    FOOTNOTE_REF,   // [^id]

    // Composite nodes
    ROOT,
    PARAGRAPH,
    HEADING,
    BLOCKQUOTE,
    CODE_BLOCK,
    HTML_BLOCK,
    LIST,
    LIST_ITEM,
    FOOTNOTE_DEFINITION,
    TABLE,
    TABLE_HEAD,
    TABLE_ROW,
    TABLE_CELL,
    EMPHASIS,
    STRONG,
    STRIKETHROUGH,
    INLINE_CODE,
    LINK,
    IMAGE,
    OTHER, // constructs the parser reports that have no dedicated kind

    #[doc(hidden)]
    __LAST,
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkdownLanguage {}

impl Language for MarkdownLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}
