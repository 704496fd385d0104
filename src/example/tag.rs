// src/example/tag.rs

//! The `include_example` tag: locate, render source, run, render transcript.

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::Result;
use crate::example::locator::{validate_name, ExampleLocator};
use crate::example::path::example_file;
use crate::example::render::TableRenderer;
use crate::example::segment::parse;
use crate::exec::ExecutionRunner;
use crate::fs::FileSystem;
use crate::types::CommentSyntax;

/// What the tag knows about the page it is rendered on.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub title: Option<String>,
}

impl PageContext {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

pub struct ExampleTagHandler {
    fs: Arc<dyn FileSystem>,
    locator: ExampleLocator,
    runner: Arc<dyn ExecutionRunner>,
    renderer: TableRenderer,
}

impl ExampleTagHandler {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        locator: ExampleLocator,
        runner: Arc<dyn ExecutionRunner>,
        renderer: TableRenderer,
    ) -> Self {
        Self {
            fs,
            locator,
            runner,
            renderer,
        }
    }

    /// Render the example for `page`, falling back to `argument` when the
    /// page has no usable title. Returns the source table followed by the
    /// transcript table. Any failure aborts with no output.
    pub async fn render(&self, page: &PageContext, argument: &str) -> Result<String> {
        let name = resolve_name(page, argument)?;
        let bundle = self.locator.locate(&name)?;

        let source_path = bundle.source_path();
        let source = self.fs.read_to_string(&source_path)?;
        let source_table = self.render_text(&source, CommentSyntax::Source)?;
        debug!(example = %name, path = %source_path.display(), "rendered source table");

        let transcript = self.runner.run(&source_path).await?;
        let output_table = self.render_text(&transcript, CommentSyntax::Transcript)?;
        info!(example = %name, "rendered example");

        Ok(format!("{source_table}\n{output_table}\n"))
    }

    fn render_text(&self, text: &str, syntax: CommentSyntax) -> Result<String> {
        let segments = parse(text, syntax);
        self.renderer.render(&segments, syntax, text)
    }
}

/// Pick the example name: the normalised page title if it yields one,
/// otherwise the trimmed tag argument.
pub fn resolve_name(page: &PageContext, argument: &str) -> Result<String> {
    let from_title = page
        .title
        .as_deref()
        .map(example_file)
        .filter(|name| !name.is_empty());

    let name = from_title.unwrap_or_else(|| argument.trim().to_string());
    validate_name(&name)?;
    Ok(name)
}
