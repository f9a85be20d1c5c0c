//! CLI integration tests for glyphmark.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (convert, render, tree, emoji)
//! - Stdin/stdout handling
//! - Exit codes
//! - File I/O operations
//! - Config discovery and error handling

mod common;
mod convert;
mod emoji;
mod render;
mod tree;
