//! Builds the lossless syntax tree from pulldown-cmark's event stream.
//!
//! pulldown-cmark reports a source range for every event. Text between the
//! ranges of content events (delimiters, fences, list markers, pipes, link
//! destinations) is kept as markup tokens of the innermost open node, so the
//! resulting tree covers the input byte for byte.

use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag};
use rowan::GreenNodeBuilder;

use crate::config::Extensions;
use crate::syntax::{SyntaxKind, SyntaxNode};

pub struct MarkdownParser<'a> {
    input: &'a str,
    options: Options,
    builder: GreenNodeBuilder<'static>,
    parents: Vec<SyntaxKind>,
    /// Everything before `pos` has been handed to the builder (or is pending).
    pos: usize,
    /// Adjacent text events are merged into one token before emitting.
    pending: Option<(SyntaxKind, Range<usize>)>,
}

impl<'a> MarkdownParser<'a> {
    pub fn new(input: &'a str, extensions: &Extensions) -> Self {
        Self {
            input,
            options: extensions.parser_options(),
            builder: GreenNodeBuilder::new(),
            parents: Vec::new(),
            pos: 0,
            pending: None,
        }
    }

    pub fn parse(mut self) -> SyntaxNode {
        let input = self.input;
        log::debug!("Parsing {} bytes with options {:?}", input.len(), self.options);

        self.builder.start_node(SyntaxKind::ROOT.into());
        self.parents.push(SyntaxKind::ROOT);

        for (event, range) in Parser::new_ext(input, self.options).into_offset_iter() {
            log::trace!("{:?} at {:?}", event, range);
            self.event(event, range);
        }

        self.gap(input.len());
        self.builder.finish_node();
        SyntaxNode::new_root(self.builder.finish())
    }

    fn event(&mut self, event: Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(tag) => {
                let kind = tag_kind(&tag);
                self.gap(range.start);
                self.builder.start_node(kind.into());
                self.parents.push(kind);
            }
            Event::End(_) => {
                self.gap(range.end);
                if self.parents.len() > 1 {
                    self.builder.finish_node();
                    self.parents.pop();
                }
            }
            Event::Text(text) => self.text(&text, range),
            Event::Code(_) => self.inline_code(range),
            Event::Html(_) | Event::InlineHtml(_) => self.leaf(SyntaxKind::HTML, range),
            Event::SoftBreak => self.leaf(SyntaxKind::SOFT_BREAK, range),
            Event::HardBreak => self.leaf(SyntaxKind::HARD_BREAK, range),
            Event::Rule => self.leaf(SyntaxKind::THEMATIC_BREAK, range),
            Event::TaskListMarker(_) => self.leaf(SyntaxKind::TASK_MARKER, range),
            Event::FootnoteReference(_) => self.leaf(SyntaxKind::FOOTNOTE_REF, range),
            _ => self.leaf(SyntaxKind::MARKUP, range),
        }
    }

    fn text(&mut self, value: &str, range: Range<usize>) {
        let Some(range) = self.clamp(range) else {
            return;
        };
        let input = self.input;
        let kind = if &input[range.clone()] != value {
            SyntaxKind::ESCAPED
        } else if self.parents.last() == Some(&SyntaxKind::CODE_BLOCK) {
            SyntaxKind::CODE_TEXT
        } else {
            SyntaxKind::TEXT
        };

        if kind == SyntaxKind::ESCAPED {
            self.leaf(kind, range);
            return;
        }

        if let Some((pending_kind, pending)) = &mut self.pending
            && *pending_kind == kind
            && pending.end == range.start
        {
            pending.end = range.end;
            self.pos = range.end;
            return;
        }

        self.gap(range.start);
        self.pos = range.end;
        self.pending = Some((kind, range));
    }

    fn inline_code(&mut self, range: Range<usize>) {
        let Some(range) = self.clamp(range) else {
            return;
        };
        self.gap(range.start);

        let input = self.input;
        let span = &input[range.clone()];
        let open = span.bytes().take_while(|&b| b == b'`').count();
        let close = span[open..]
            .bytes()
            .rev()
            .take_while(|&b| b == b'`')
            .count()
            .min(open);
        let content = &span[open..span.len() - close];

        self.builder.start_node(SyntaxKind::INLINE_CODE.into());
        if open > 0 {
            self.builder
                .token(SyntaxKind::CODE_MARKER.into(), &span[..open]);
        }
        if !content.is_empty() {
            self.builder.token(SyntaxKind::CODE_TEXT.into(), content);
        }
        if close > 0 {
            self.builder
                .token(SyntaxKind::CODE_MARKER.into(), &span[span.len() - close..]);
        }
        self.builder.finish_node();
        self.pos = range.end;
    }

    fn leaf(&mut self, kind: SyntaxKind, range: Range<usize>) {
        let Some(range) = self.clamp(range) else {
            return;
        };
        self.gap(range.start);
        let input = self.input;
        self.builder.token(kind.into(), &input[range.clone()]);
        self.pos = range.end;
    }

    /// Drop the part of `range` that has already been consumed.
    fn clamp(&self, range: Range<usize>) -> Option<Range<usize>> {
        let start = range.start.max(self.pos);
        (range.end > start).then_some(start..range.end)
    }

    fn flush_text(&mut self) {
        if let Some((kind, range)) = self.pending.take() {
            let input = self.input;
            self.builder.token(kind.into(), &input[range]);
        }
    }

    /// Emit the unconsumed source up to `end` as markup of the current node.
    fn gap(&mut self, end: usize) {
        self.flush_text();
        if end <= self.pos {
            return;
        }
        let input = self.input;
        let parent = self.parents.last().copied().unwrap_or(SyntaxKind::ROOT);
        for (kind, piece) in split_markup(&input[self.pos..end], parent) {
            self.builder.token(kind.into(), piece);
        }
        self.pos = end;
    }
}

fn tag_kind(tag: &Tag<'_>) -> SyntaxKind {
    match tag {
        Tag::Paragraph => SyntaxKind::PARAGRAPH,
        Tag::Heading { .. } => SyntaxKind::HEADING,
        Tag::BlockQuote(_) => SyntaxKind::BLOCKQUOTE,
        Tag::CodeBlock(_) => SyntaxKind::CODE_BLOCK,
        Tag::HtmlBlock => SyntaxKind::HTML_BLOCK,
        Tag::List(_) => SyntaxKind::LIST,
        Tag::Item => SyntaxKind::LIST_ITEM,
        Tag::FootnoteDefinition(_) => SyntaxKind::FOOTNOTE_DEFINITION,
        Tag::Table(_) => SyntaxKind::TABLE,
        Tag::TableHead => SyntaxKind::TABLE_HEAD,
        Tag::TableRow => SyntaxKind::TABLE_ROW,
        Tag::TableCell => SyntaxKind::TABLE_CELL,
        Tag::Emphasis => SyntaxKind::EMPHASIS,
        Tag::Strong => SyntaxKind::STRONG,
        Tag::Strikethrough => SyntaxKind::STRIKETHROUGH,
        Tag::Link { .. } => SyntaxKind::LINK,
        Tag::Image { .. } => SyntaxKind::IMAGE,
        _ => SyntaxKind::OTHER,
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Class {
    Newline,
    Space,
    Mark,
}

fn classify(c: char) -> Class {
    match c {
        '\n' | '\r' => Class::Newline,
        c if c.is_whitespace() => Class::Space,
        _ => Class::Mark,
    }
}

/// Split non-content source into newline, whitespace and markup runs.
fn split_markup(text: &str, parent: SyntaxKind) -> Vec<(SyntaxKind, &str)> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut current: Option<Class> = None;

    for (idx, c) in text.char_indices() {
        let class = classify(c);
        if let Some(prev) = current
            && prev != class
        {
            pieces.push(piece(&text[start..idx], prev, parent));
            start = idx;
        }
        current = Some(class);
    }
    if let Some(class) = current {
        pieces.push(piece(&text[start..], class, parent));
    }
    pieces
}

fn piece(text: &str, class: Class, parent: SyntaxKind) -> (SyntaxKind, &str) {
    let kind = match class {
        Class::Newline => SyntaxKind::NEWLINE,
        Class::Space => SyntaxKind::WHITESPACE,
        Class::Mark => marker_kind(text, parent),
    };
    (kind, text)
}

fn marker_kind(text: &str, parent: SyntaxKind) -> SyntaxKind {
    let only = |set: &[char]| text.chars().all(|c| set.contains(&c));
    match parent {
        SyntaxKind::EMPHASIS if only(&['*', '_']) => SyntaxKind::EMPHASIS_MARKER,
        SyntaxKind::STRONG if only(&['*', '_']) => SyntaxKind::STRONG_MARKER,
        SyntaxKind::STRIKETHROUGH if only(&['~']) => SyntaxKind::STRIKETHROUGH_MARKER,
        _ => SyntaxKind::MARKUP,
    }
}
