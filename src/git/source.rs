// src/git/source.rs

//! Where git metadata comes from: process environment and the `git` CLI.

use std::future::Future;
use std::pin::Pin;

use tokio::process::Command;
use tracing::debug;

use crate::errors::{ByExampleError, Result};

pub trait Environment: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Version-control queries used when the CI environment is absent.
pub trait VersionControl: Send + Sync {
    /// Current branch name.
    fn branch(&self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>>;

    /// Current revision hash.
    fn revision(&self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>>;
}

/// Shells out to `git rev-parse`.
#[derive(Debug, Clone, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }

    async fn rev_parse(&self, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new("git");
        cmd.arg("rev-parse").args(args);

        debug!(?args, "querying git");
        let output = cmd
            .output()
            .await
            .map_err(|e| ByExampleError::Git(format!("spawning git: {e}")))?;

        if !output.status.success() {
            return Err(ByExampleError::Git(format!(
                "git rev-parse {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

impl VersionControl for GitCli {
    fn branch(&self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        Box::pin(self.rev_parse(&["--abbrev-ref", "HEAD"]))
    }

    fn revision(&self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        Box::pin(self.rev_parse(&["HEAD"]))
    }
}
