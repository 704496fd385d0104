// src/example/segment.rs

//! Splits an example file into (comment, code) segments.
//!
//! A blank line closes the current segment. Within a segment, comment lines
//! (first non-whitespace characters `# `) have their marker stripped and go
//! to the docs column; every other line is kept verbatim as code.
//!
//! Flags are computed in a second pass over the finished list so nothing
//! already built is patched afterwards.

use crate::types::CommentSyntax;

/// Code half of a segment plus the flags the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    text: String,
    is_empty: bool,
    is_leading: bool,
    has_trailing_code: bool,
}

impl CodeBlock {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Code text is blank.
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// First segment of the file and it carries no code (pure preamble).
    pub fn is_leading(&self) -> bool {
        self.is_leading
    }

    /// The *next* segment has non-blank code. Always false for the last one.
    ///
    /// [`TableRenderer`](crate::example::TableRenderer) does not emit a class
    /// for it; it is there for stylesheets or callers that want to merge
    /// code cells split only by a blank line.
    pub fn has_trailing_code(&self) -> bool {
        self.has_trailing_code
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    comment: String,
    code: CodeBlock,
}

impl Segment {
    /// Comment text with the `# ` markers removed.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn code(&self) -> &CodeBlock {
        &self.code
    }
}

/// Ordered segments of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentSequence {
    segments: Vec<Segment>,
}

impl SegmentSequence {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&Segment> {
        self.segments.get(idx)
    }
}

impl<'a> IntoIterator for &'a SegmentSequence {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[derive(Default)]
struct RawPair {
    comment: String,
    code: String,
}

/// Parse `text` into segments. Always yields at least one segment.
pub fn parse(text: &str, syntax: CommentSyntax) -> SegmentSequence {
    let pairs = split_pairs(text, syntax);
    SegmentSequence {
        segments: with_flags(pairs),
    }
}

fn split_pairs(text: &str, syntax: CommentSyntax) -> Vec<RawPair> {
    let mut pairs = Vec::new();
    let mut current = RawPair::default();

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            pairs.push(std::mem::take(&mut current));
        } else if syntax.is_comment(line) {
            current.comment.push_str(uncomment(line));
        } else {
            current.code.push_str(line);
        }
    }
    pairs.push(current);

    pairs
}

fn uncomment(line: &str) -> &str {
    let trimmed = line.trim_start();
    trimmed.strip_prefix("# ").unwrap_or(trimmed)
}

fn with_flags(pairs: Vec<RawPair>) -> Vec<Segment> {
    let non_empty: Vec<bool> = pairs.iter().map(|p| !p.code.trim().is_empty()).collect();

    pairs
        .into_iter()
        .enumerate()
        .map(|(idx, pair)| {
            let is_empty = !non_empty[idx];
            Segment {
                comment: pair.comment,
                code: CodeBlock {
                    text: pair.code,
                    is_empty,
                    is_leading: idx == 0 && is_empty,
                    has_trailing_code: non_empty.get(idx + 1).copied().unwrap_or(false),
                },
            }
        })
        .collect()
}
