//! Wires parsing, emoji expansion and the glyph transform to a consumer.

use crate::config::Config;
use crate::emoji;
use crate::parser::MarkdownParser;
use crate::render::{self, DisplayNode};
use crate::syntax::SyntaxNode;
use crate::transform::transform;

/// A consumer of the transformed document tree.
pub trait Sink {
    type Output;

    fn consume(&self, tree: &SyntaxNode, config: &Config) -> Self::Output;
}

/// Regenerates markdown source from the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownText;

impl Sink for MarkdownText {
    type Output = String;

    fn consume(&self, tree: &SyntaxNode, _config: &Config) -> String {
        tree.text().to_string()
    }
}

/// Builds the display tree handed to front-end renderers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayTree;

impl Sink for DisplayTree {
    type Output = DisplayNode;

    fn consume(&self, tree: &SyntaxNode, config: &Config) -> DisplayNode {
        render::display_tree(tree, &config.render)
    }
}

/// Renders (optionally sanitized) HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

impl Sink for Html {
    type Output = String;

    fn consume(&self, tree: &SyntaxNode, config: &Config) -> String {
        render::to_html(tree, &config.extensions, &config.render)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse `input` and apply every enabled rewrite. `None` is treated as
    /// an empty document.
    pub fn process(&self, input: Option<&str>) -> SyntaxNode {
        let input = input.unwrap_or_default();
        let mut tree = MarkdownParser::new(input, &self.config.extensions).parse();
        if self.config.emoji {
            tree = emoji::expand_shortcodes(&tree);
        }
        transform(&tree)
    }

    pub fn run<S: Sink>(&self, input: Option<&str>, sink: &S) -> S::Output {
        let tree = self.process(input);
        sink.consume(&tree, &self.config)
    }
}
