use std::fmt;
use std::str::FromStr;

use crate::errors::ByExampleError;

/// Which kind of file a segment stream was read from.
///
/// - `Source`: the example program itself (`.rb`).
/// - `Transcript`: the captured console session of running it (`.sh`).
///
/// Both use the same comment rule: a line whose first non-whitespace
/// characters are `# `.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentSyntax {
    Source,
    Transcript,
}

impl CommentSyntax {
    /// File extension (with leading dot) associated with this syntax.
    pub fn extension(self) -> &'static str {
        match self {
            CommentSyntax::Source => ".rb",
            CommentSyntax::Transcript => ".sh",
        }
    }

    /// Language tag placed on fenced code blocks handed to the highlighter.
    pub fn language(self) -> &'static str {
        match self {
            CommentSyntax::Source => "ruby",
            CommentSyntax::Transcript => "console",
        }
    }

    /// Whether `line` is a comment line under this syntax.
    pub fn is_comment(self, line: &str) -> bool {
        match self {
            CommentSyntax::Source | CommentSyntax::Transcript => {
                line.trim_start().starts_with("# ")
            }
        }
    }
}

impl fmt::Display for CommentSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for CommentSyntax {
    type Err = ByExampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "rb" => Ok(CommentSyntax::Source),
            "sh" => Ok(CommentSyntax::Transcript),
            _ => Err(ByExampleError::UnsupportedSyntax(s.to_string())),
        }
    }
}
