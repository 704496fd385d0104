// src/example/render.rs

//! Renders a [`SegmentSequence`] as a two-column docs/code table.

use std::sync::Arc;

use tracing::trace;
use url::form_urlencoded;

use crate::config::PlaygroundSection;
use crate::errors::Result;
use crate::example::segment::SegmentSequence;
use crate::markup::{fenced_block, Highlighter, MarkdownConverter};
use crate::types::CommentSyntax;

pub struct TableRenderer {
    markdown: Arc<dyn MarkdownConverter>,
    highlighter: Arc<dyn Highlighter>,
    playground: PlaygroundSection,
}

impl TableRenderer {
    pub fn new(
        markdown: Arc<dyn MarkdownConverter>,
        highlighter: Arc<dyn Highlighter>,
        playground: PlaygroundSection,
    ) -> Self {
        Self {
            markdown,
            highlighter,
            playground,
        }
    }

    /// Render one row per segment.
    ///
    /// `original` is the full unparsed file content. For source tables it
    /// feeds the playground link placed in the first non-empty code cell.
    pub fn render(
        &self,
        segments: &SegmentSequence,
        syntax: CommentSyntax,
        original: &str,
    ) -> Result<String> {
        let mut out = String::from("<table>");
        let mut link_added = false;

        for segment in segments {
            let code = segment.code();

            out.push_str("<tr>");
            out.push_str("<td class=\"docs\">");
            out.push_str(&self.render_comment(segment.comment())?);
            out.push_str("</td>");

            out.push_str("<td class=\"code");
            if code.is_empty() {
                out.push_str(" empty");
            }
            if code.is_leading() {
                out.push_str(" leading");
            }
            out.push_str("\">");

            if syntax == CommentSyntax::Source
                && self.playground.enabled
                && !code.is_empty()
                && !link_added
            {
                out.push_str(&self.playground_link(original));
                link_added = true;
            }

            out.push_str(&self.render_code(code.text(), syntax)?);
            out.push_str("</td>");
            out.push_str("</tr>");
        }

        out.push_str("</table>");
        trace!(syntax = %syntax, rows = segments.len(), "rendered table");

        Ok(out)
    }

    fn render_comment(&self, comment: &str) -> Result<String> {
        if comment.trim().is_empty() {
            return Ok(String::new());
        }
        Ok(self.markdown.convert(comment)?)
    }

    fn render_code(&self, code: &str, syntax: CommentSyntax) -> Result<String> {
        if code.trim().is_empty() {
            return Ok(String::new());
        }
        Ok(self
            .highlighter
            .highlight(&fenced_block(syntax.language(), code))?)
    }

    fn playground_link(&self, source: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(source.as_bytes()).collect();
        let engine: String = form_urlencoded::byte_serialize(self.playground.engine.as_bytes()).collect();
        format!(
            "<a href=\"{}{}&engine={}\" target=\"_blank\"><img class=\"run\" title=\"Run code\" src=\"{}\" /></a>",
            self.playground.url, encoded, engine, self.playground.icon
        )
    }
}
