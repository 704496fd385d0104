use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use byexample::errors::{ByExampleError, Result};
use byexample::git::{Environment, VersionControl};

/// Environment backed by a fixed map.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl Environment for MapEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Version control fake that counts how often each query runs.
///
/// A `None` value makes the corresponding query fail.
#[derive(Debug, Clone)]
pub struct CountingVcs {
    branch: Option<String>,
    revision: Option<String>,
    branch_calls: Arc<AtomicUsize>,
    revision_calls: Arc<AtomicUsize>,
}

impl CountingVcs {
    pub fn new(branch: Option<&str>, revision: Option<&str>) -> Self {
        Self {
            branch: branch.map(str::to_string),
            revision: revision.map(str::to_string),
            branch_calls: Arc::new(AtomicUsize::new(0)),
            revision_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn branch_calls(&self) -> usize {
        self.branch_calls.load(Ordering::SeqCst)
    }

    pub fn revision_calls(&self) -> usize {
        self.revision_calls.load(Ordering::SeqCst)
    }
}

impl VersionControl for CountingVcs {
    fn branch(&self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        self.branch_calls.fetch_add(1, Ordering::SeqCst);
        let value = self.branch.clone();
        Box::pin(async move { value.ok_or_else(|| ByExampleError::Git("no branch".to_string())) })
    }

    fn revision(&self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        self.revision_calls.fetch_add(1, Ordering::SeqCst);
        let value = self.revision.clone();
        Box::pin(async move { value.ok_or_else(|| ByExampleError::Git("no revision".to_string())) })
    }
}
