// src/git/provider.rs

use std::sync::Arc;

use tracing::debug;

use crate::errors::Result;
use crate::git::cache::GitMetadataCache;
use crate::git::key::GitKey;
use crate::git::source::{Environment, VersionControl};

const DEV_RUN_ID: &str = "dev";
const SHORT_LEN: usize = 7;

/// Resolves [`GitKey`] values, memoising each one in its cache.
///
/// - `run_id`: `GITHUB_RUN_ID`, else `dev`.
/// - `ref`: `GITHUB_REF`, else the current branch from version control.
/// - `commit`: `GITHUB_SHA`, else the current revision.
/// - `short`: first 7 characters of `commit`.
///
/// Empty environment variables count as unset. Failed lookups are not
/// cached.
pub struct GitMetadataProvider {
    cache: GitMetadataCache,
    env: Arc<dyn Environment>,
    vcs: Arc<dyn VersionControl>,
}

impl GitMetadataProvider {
    pub fn new(
        cache: GitMetadataCache,
        env: Arc<dyn Environment>,
        vcs: Arc<dyn VersionControl>,
    ) -> Self {
        Self { cache, env, vcs }
    }

    pub fn cache(&self) -> &GitMetadataCache {
        &self.cache
    }

    pub async fn get(&mut self, key: GitKey) -> Result<String> {
        if let Some(value) = self.cache.get(key) {
            debug!(key = %key, "git metadata cache hit");
            return Ok(value.to_string());
        }

        let value = match key {
            GitKey::RunId => self.env_value(key).unwrap_or_else(|| DEV_RUN_ID.to_string()),
            GitKey::Ref => match self.env_value(key) {
                Some(value) => value,
                None => self.vcs.branch().await?,
            },
            GitKey::Commit => self.commit().await?,
            GitKey::Short => self.commit().await?.chars().take(SHORT_LEN).collect::<String>(),
        };

        Ok(self.cache.insert(key, value).to_string())
    }

    async fn commit(&mut self) -> Result<String> {
        if let Some(value) = self.cache.get(GitKey::Commit) {
            return Ok(value.to_string());
        }
        let value = match self.env_value(GitKey::Commit) {
            Some(value) => value,
            None => self.vcs.revision().await?,
        };
        Ok(self.cache.insert(GitKey::Commit, value).to_string())
    }

    fn env_value(&self, key: GitKey) -> Option<String> {
        key.env_var()
            .and_then(|name| self.env.var(name))
            .filter(|value| !value.is_empty())
    }
}
