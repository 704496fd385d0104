// src/template.rs

//! Tag surface exposed to page templates.
//!
//! Recognises two tags and one output filter inside page text:
//!
//! ```text
//! {% include_example values %}
//! {% git short %}
//! {{ page.title | example_file }}
//! {{ "My Example" | example_file }}
//! ```
//!
//! Everything else is copied through untouched.

use std::ops::Range;

use regex::Regex;
use tracing::debug;

use crate::errors::{ByExampleError, Error, Result};
use crate::example::path::example_file;
use crate::example::{ExampleTagHandler, PageContext};
use crate::git::{GitKey, GitMetadataProvider};

const TAG_PATTERN: &str = r"\{%-?\s*(include_example|git)\b([^%]*?)\s*-?%\}";
const FILTER_PATTERN: &str = r"\{\{-?\s*([^{}|]*?)\s*\|\s*example_file\s*-?\}\}";

/// Input of the `example_file` filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterInput {
    /// A quoted string literal.
    Literal(String),
    /// `page.title`; renders empty when the page has no title.
    PageTitle,
}

impl FilterInput {
    fn parse(expr: &str) -> Result<Self> {
        if expr == "page.title" {
            return Ok(Self::PageTitle);
        }
        ['"', '\'']
            .iter()
            .find_map(|q| expr.strip_prefix(*q)?.strip_suffix(*q))
            .map(|literal| Self::Literal(literal.to_string()))
            .ok_or_else(|| ByExampleError::UnsupportedFilterInput(expr.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// `include_example [name]`; the name may be empty when the page title
    /// supplies it.
    IncludeExample(String),
    Git(GitKey),
    /// `{{ <input> | example_file }}`
    ExampleFile(FilterInput),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInvocation {
    /// Byte range of the whole `{% ... %}` or `{{ ... }}` in the page text.
    pub span: Range<usize>,
    pub tag: Tag,
}

/// Find every supported tag and filter in `text`, ordered by position.
pub fn scan(text: &str) -> Result<Vec<TagInvocation>> {
    let tags = Regex::new(TAG_PATTERN).map_err(Error::from)?;
    let filters = Regex::new(FILTER_PATTERN).map_err(Error::from)?;

    let mut found = tags
        .captures_iter(text)
        .map(|caps| -> Result<TagInvocation> {
            let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
            let argument = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
            let tag = match caps.get(1).map(|m| m.as_str()) {
                Some("git") => Tag::Git(argument.parse()?),
                _ => Tag::IncludeExample(argument.to_string()),
            };
            Ok(TagInvocation { span: whole, tag })
        })
        .collect::<Result<Vec<_>>>()?;

    for caps in filters.captures_iter(text) {
        let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
        let input = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        found.push(TagInvocation {
            span: whole,
            tag: Tag::ExampleFile(FilterInput::parse(input)?),
        });
    }

    found.sort_by_key(|invocation| invocation.span.start);
    Ok(found)
}

/// Expand all tags in `text`. The first failing tag aborts the expansion.
pub async fn expand(
    text: &str,
    page: &PageContext,
    examples: &ExampleTagHandler,
    git: &mut GitMetadataProvider,
) -> Result<String> {
    let invocations = scan(text)?;
    debug!(tags = invocations.len(), "expanding page tags");

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for invocation in invocations {
        out.push_str(&text[cursor..invocation.span.start]);
        let rendered = match &invocation.tag {
            Tag::IncludeExample(name) => examples.render(page, name).await?,
            Tag::Git(key) => git.get(*key).await?,
            Tag::ExampleFile(FilterInput::Literal(value)) => example_file(value),
            Tag::ExampleFile(FilterInput::PageTitle) => {
                page.title.as_deref().map(example_file).unwrap_or_default()
            }
        };
        out.push_str(&rendered);
        cursor = invocation.span.end;
    }
    out.push_str(&text[cursor..]);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ByExampleError;

    #[test]
    fn finds_both_tags_in_order() {
        let text = "<h1>x</h1>\n{% include_example values %}\n<p>{%- git short -%}</p>";
        let found = scan(text).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].tag, Tag::IncludeExample("values".to_string()));
        assert_eq!(&text[found[0].span.clone()], "{% include_example values %}");
        assert_eq!(found[1].tag, Tag::Git(GitKey::Short));
        assert_eq!(&text[found[1].span.clone()], "{%- git short -%}");
    }

    #[test]
    fn include_example_argument_is_optional() {
        let found = scan("{% include_example %}").unwrap();
        assert_eq!(found[0].tag, Tag::IncludeExample(String::new()));
    }

    #[test]
    fn other_tags_are_ignored() {
        assert!(scan("{% include header.html %}{{ page.title }}{% gitlab %}")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn finds_example_file_filters_between_tags() {
        let text = "{% git short %}<a href=\"{{ \"My Example\" | example_file }}\">{{- page.title|example_file -}}</a>";
        let found = scan(text).unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].tag, Tag::Git(GitKey::Short));
        assert_eq!(
            found[1].tag,
            Tag::ExampleFile(FilterInput::Literal("My Example".to_string()))
        );
        assert_eq!(&text[found[1].span.clone()], "{{ \"My Example\" | example_file }}");
        assert_eq!(found[2].tag, Tag::ExampleFile(FilterInput::PageTitle));
    }

    #[test]
    fn single_quoted_literal_is_accepted() {
        let found = scan("{{ 'Hello  World' | example_file }}").unwrap();
        assert_eq!(
            found[0].tag,
            Tag::ExampleFile(FilterInput::Literal("Hello  World".to_string()))
        );
    }

    #[test]
    fn other_filters_and_unknown_inputs() {
        assert!(scan("{{ page.title | downcase }}").unwrap().is_empty());

        let err = scan("{{ site.name | example_file }}").unwrap_err();
        assert!(matches!(err, ByExampleError::UnsupportedFilterInput(ref e) if e == "site.name"));

        let err = scan("{{ \" | example_file }}").unwrap_err();
        assert!(matches!(err, ByExampleError::UnsupportedFilterInput(_)));
    }

    #[test]
    fn unknown_git_key_fails_scan() {
        let err = scan("{% git branch %}").unwrap_err();
        assert!(matches!(err, ByExampleError::UnknownGitKey(ref k) if k == "branch"));
    }
}
