// src/markup/mod.rs

//! Conversion collaborators used by the table renderer.
//!
//! - [`MarkdownConverter`] turns comment text into markup.
//! - [`Highlighter`] turns a fenced code block (```` ```lang ````) into
//!   highlighted markup.
//!
//! [`ComrakMarkup`] implements both on top of `comrak`. Tests plug in
//! their own implementations.

pub mod comrak;

use anyhow::Result;

pub use self::comrak::ComrakMarkup;

pub trait MarkdownConverter: Send + Sync {
    fn convert(&self, text: &str) -> Result<String>;
}

pub trait Highlighter: Send + Sync {
    fn highlight(&self, fenced_block: &str) -> Result<String>;
}

/// Wrap `code` in a fenced block tagged with `language`. Trailing newlines
/// of `code` are dropped so the block does not end in a blank line.
pub fn fenced_block(language: &str, code: &str) -> String {
    let code = code.trim_end_matches('\n');
    format!("```{language}\n{code}\n```\n")
}
