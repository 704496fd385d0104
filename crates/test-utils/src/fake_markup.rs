use byexample::markup::{Highlighter, MarkdownConverter};

/// Deterministic stand-in for the Markdown / highlighting backends.
///
/// - comments become `<p>{text}</p>` (trailing newline trimmed)
/// - fenced blocks become `<pre lang="{lang}">{code}</pre>`
pub struct EchoMarkup;

impl MarkdownConverter for EchoMarkup {
    fn convert(&self, text: &str) -> anyhow::Result<String> {
        Ok(format!("<p>{}</p>", text.trim_end()))
    }
}

impl Highlighter for EchoMarkup {
    fn highlight(&self, fenced_block: &str) -> anyhow::Result<String> {
        let (fence, rest) = fenced_block.split_once('\n').unwrap_or((fenced_block, ""));
        let lang = fence.trim_start_matches('`');
        let code = rest.trim_end_matches("```\n").trim_end();
        Ok(format!("<pre lang=\"{lang}\">{code}</pre>"))
    }
}
