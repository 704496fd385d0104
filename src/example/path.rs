// src/example/path.rs

//! Path joining and example-name derivation.

use std::path::{Path, PathBuf};

use crate::types::CommentSyntax;

/// Join path segments into one path.
///
/// Each segment may itself contain `/` or `\` separators; they are split
/// and re-joined with the platform separator. Empty and `.` components are
/// dropped. A leading `/` on the first segment keeps the result absolute.
/// No filesystem access happens here.
pub fn join<I, S>(segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = PathBuf::new();
    for (idx, segment) in segments.into_iter().enumerate() {
        let segment = segment.as_ref();
        if idx == 0 && (segment.starts_with('/') || segment.starts_with('\\')) {
            out.push(std::path::MAIN_SEPARATOR_STR);
        }
        for part in segment.split(['/', '\\']) {
            if part.is_empty() || part == "." {
                continue;
            }
            out.push(part);
        }
    }
    out
}

/// Path of `<dir>/<name><ext>` for the given syntax.
pub fn example_file_path(dir: &Path, name: &str, syntax: CommentSyntax) -> PathBuf {
    dir.join(format!("{name}{}", syntax.extension()))
}

/// Turn a page title into an example name: every whitespace run becomes a
/// single `_`, then the whole thing is lower-cased.
///
/// Also exposed to templates as the `example_file` filter, see
/// [`crate::template`].
pub fn example_file(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    out
}
