// src/markup/comrak.rs

use std::fmt;

use anyhow::Result;
use comrak::plugins::syntect::SyntectAdapter;
use comrak::{markdown_to_html, markdown_to_html_with_plugins, Options, Plugins};

use super::{Highlighter, MarkdownConverter};
use crate::config::MarkupSection;

/// Markdown + highlighting backend built on `comrak`.
///
/// Code fences go through comrak's syntect plugin, so code cells come out
/// as `<span style="..">` runs coloured by the configured theme. Languages
/// syntect does not know (e.g. `console`) are emitted as plain text.
pub struct ComrakMarkup {
    allow_raw_html: bool,
    theme: String,
    adapter: SyntectAdapter,
}

impl ComrakMarkup {
    pub fn new() -> Self {
        Self::from_config(&MarkupSection::default())
    }

    pub fn from_config(section: &MarkupSection) -> Self {
        Self {
            allow_raw_html: !section.escape_html,
            theme: section.theme.clone(),
            adapter: SyntectAdapter::new(Some(&section.theme)),
        }
    }

    fn options(&self) -> Options<'static> {
        let mut options = Options::default();
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.render.unsafe_ = self.allow_raw_html;
        options.render.escape = !self.allow_raw_html;
        options
    }
}

impl Default for ComrakMarkup {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComrakMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComrakMarkup")
            .field("allow_raw_html", &self.allow_raw_html)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl MarkdownConverter for ComrakMarkup {
    fn convert(&self, text: &str) -> Result<String> {
        Ok(markdown_to_html(text, &self.options()))
    }
}

impl Highlighter for ComrakMarkup {
    fn highlight(&self, fenced_block: &str) -> Result<String> {
        let mut plugins = Plugins::default();
        plugins.render.codefence_syntax_highlighter = Some(&self.adapter);
        Ok(markdown_to_html_with_plugins(
            fenced_block,
            &self.options(),
            &plugins,
        ))
    }
}
