// src/example/locator.rs

//! Finds the directory holding an example bundle.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::{ByExampleError, Result};
use crate::example::path::{example_file_path, join};
use crate::fs::FileSystem;
use crate::types::CommentSyntax;

/// A located example: its logical name and the directory containing
/// `<name>.rb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleBundle {
    pub name: String,
    pub dir: PathBuf,
}

impl ExampleBundle {
    pub fn source_path(&self) -> PathBuf {
        example_file_path(&self.dir, &self.name, CommentSyntax::Source)
    }

    /// Sibling `<name>.sh`. Not required to exist.
    pub fn transcript_path(&self) -> PathBuf {
        example_file_path(&self.dir, &self.name, CommentSyntax::Transcript)
    }
}

/// Searches an ordered list of roots for `<root>/<name>/<name>.rb`.
#[derive(Debug, Clone)]
pub struct ExampleLocator {
    fs: Arc<dyn FileSystem>,
    roots: Vec<String>,
}

impl ExampleLocator {
    pub fn new(fs: Arc<dyn FileSystem>, roots: Vec<String>) -> Self {
        Self { fs, roots }
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Return the first root that holds a valid bundle for `name`.
    pub fn locate(&self, name: &str) -> Result<ExampleBundle> {
        validate_name(name)?;

        for root in &self.roots {
            let dir = join([root.as_str(), name]);
            if self.is_valid_bundle_dir(&dir, name) {
                info!(example = %name, dir = %dir.display(), "located example");
                return Ok(ExampleBundle {
                    name: name.to_string(),
                    dir,
                });
            }
            debug!(example = %name, root = %root, "no example bundle under root");
        }

        Err(ByExampleError::NotFound {
            name: name.to_string(),
            roots: self.roots.clone(),
        })
    }

    /// All valid bundles directly under `root`, sorted by name.
    pub fn list(&self, root: &str) -> Result<Vec<ExampleBundle>> {
        let root_dir = join([root]);
        if !self.fs.is_dir(&root_dir) {
            return Ok(Vec::new());
        }

        let mut bundles: Vec<ExampleBundle> = self
            .fs
            .read_dir(&root_dir)?
            .into_iter()
            .filter_map(|dir| {
                let name = dir.file_name()?.to_str()?.to_string();
                self.is_valid_bundle_dir(&dir, &name)
                    .then_some(ExampleBundle { name, dir })
            })
            .collect();
        bundles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(bundles)
    }

    // The `.sh` companion is deliberately not checked.
    fn is_valid_bundle_dir(&self, dir: &std::path::Path, name: &str) -> bool {
        self.fs.is_dir(dir)
            && self
                .fs
                .is_file(&example_file_path(dir, name, CommentSyntax::Source))
    }
}

/// Reject an empty (or whitespace-only) example name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ByExampleError::InvalidName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    fn locator(fs: MockFileSystem, roots: &[&str]) -> ExampleLocator {
        ExampleLocator::new(
            Arc::new(fs),
            roots.iter().map(|r| r.to_string()).collect(),
        )
    }

    #[test]
    fn finds_bundle_in_first_matching_root() {
        let fs = MockFileSystem::new();
        fs.add_file("docs/values/values.rb", "puts 1\n");
        fs.add_file("examples/values/values.rb", "puts 2\n");

        let bundle = locator(fs, &["missing", "docs", "examples"])
            .locate("values")
            .unwrap();
        assert_eq!(bundle.dir, join(["docs", "values"]));
        assert_eq!(bundle.source_path(), join(["docs", "values", "values.rb"]));
        assert_eq!(bundle.transcript_path(), join(["docs", "values", "values.sh"]));
    }

    #[test]
    fn directory_without_source_is_skipped() {
        let fs = MockFileSystem::new();
        fs.add_file("a/values/README.md", "nothing here");
        fs.add_file("b/values/values.rb", "puts 1\n");

        let bundle = locator(fs, &["a", "b"]).locate("values").unwrap();
        assert_eq!(bundle.dir, join(["b", "values"]));
    }

    #[test]
    fn missing_bundle_reports_name_and_roots() {
        let fs = MockFileSystem::new();
        fs.add_dir("examples");

        let err = locator(fs, &["examples"]).locate("my_example").unwrap_err();
        match &err {
            ByExampleError::NotFound { name, roots } => {
                assert_eq!(name, "my_example");
                assert_eq!(roots, &vec!["examples".to_string()]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("my_example"));
        assert!(msg.contains("[\"examples\"]"));
    }

    #[test]
    fn companion_file_is_not_required() {
        let fs = MockFileSystem::new();
        fs.add_file("examples/arrays/arrays.rb", "p [1]\n");
        assert!(locator(fs, &["examples"]).locate("arrays").is_ok());
    }

    #[test]
    fn lists_only_valid_bundles() {
        let fs = MockFileSystem::new();
        fs.add_file("examples/values/values.rb", "");
        fs.add_file("examples/arrays/arrays.rb", "");
        fs.add_file("examples/broken/other.rb", "");
        fs.add_file("examples/README.md", "");

        let loc = locator(fs, &["examples", "missing"]);
        let names: Vec<String> = loc
            .list("examples")
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["arrays", "values"]);
        assert!(loc.list("missing").unwrap().is_empty());
    }

    #[test]
    fn empty_name_is_invalid() {
        let fs = MockFileSystem::new();
        let err = locator(fs, &["examples"]).locate("").unwrap_err();
        assert!(matches!(err, ByExampleError::InvalidName));
    }
}
