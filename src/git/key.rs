// src/git/key.rs

use std::fmt;
use std::str::FromStr;

use crate::errors::ByExampleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GitKey {
    /// CI run identifier, `dev` outside CI.
    RunId,
    /// Current branch / ref.
    Ref,
    /// Full revision hash.
    Commit,
    /// First 7 characters of [`GitKey::Commit`].
    Short,
}

impl GitKey {
    pub const ALL: [GitKey; 4] = [GitKey::RunId, GitKey::Ref, GitKey::Commit, GitKey::Short];

    pub fn as_str(self) -> &'static str {
        match self {
            GitKey::RunId => "run_id",
            GitKey::Ref => "ref",
            GitKey::Commit => "commit",
            GitKey::Short => "short",
        }
    }

    /// Environment variable that overrides this key, if any.
    pub fn env_var(self) -> Option<&'static str> {
        match self {
            GitKey::RunId => Some("GITHUB_RUN_ID"),
            GitKey::Ref => Some("GITHUB_REF"),
            GitKey::Commit => Some("GITHUB_SHA"),
            GitKey::Short => None,
        }
    }
}

impl fmt::Display for GitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GitKey {
    type Err = ByExampleError;

    /// Parses the first whitespace-separated word, so tag arguments like
    /// `"short  "` or `"commit extra"` work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.split_whitespace().next().unwrap_or_default();
        GitKey::ALL
            .into_iter()
            .find(|key| key.as_str() == word)
            .ok_or_else(|| ByExampleError::UnknownGitKey(word.to_string()))
    }
}
