// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ByExampleError {
    #[error("invalid title or example name")]
    InvalidName,

    #[error("could not locate example {name:?} in {roots:?}")]
    NotFound { name: String, roots: Vec<String> },

    #[error("unhandled file type: {0}")]
    UnsupportedSyntax(String),

    #[error("unknown git key: {0:?} (expected run_id, ref, commit or short)")]
    UnknownGitKey(String),

    #[error("example_file filter expects a quoted string or page.title, got {0:?}")]
    UnsupportedFilterInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("failed to run `{command}`: {source}")]
    Execution {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` did not finish within {secs}s")]
    ExecutionTimeout { command: String, secs: u64 },

    #[error("git query failed: {0}")]
    Git(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ByExampleError>;
