// src/git/cache.rs

use std::collections::HashMap;

use tracing::debug;

use crate::git::key::GitKey;

/// Resolved metadata values. First insert per key wins; never invalidated.
#[derive(Debug, Default, Clone)]
pub struct GitMetadataCache {
    values: HashMap<GitKey, String>,
}

impl GitMetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: GitKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Store `value` unless `key` already has one; returns the cached value.
    pub fn insert(&mut self, key: GitKey, value: String) -> &str {
        self.values.entry(key).or_insert_with(|| {
            debug!(key = %key, value = %value, "caching git metadata");
            value
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
