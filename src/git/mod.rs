// src/git/mod.rs

//! Repository/build identifiers for the `git` tag.
//!
//! - [`key`]: the four supported keys.
//! - [`cache`]: explicit per-process memo of resolved values.
//! - [`source`]: environment and version-control lookups, behind traits.
//! - [`provider`]: resolution rules + memoisation.

pub mod cache;
pub mod key;
pub mod provider;
pub mod source;

pub use cache::GitMetadataCache;
pub use key::GitKey;
pub use provider::GitMetadataProvider;
pub use source::{Environment, GitCli, ProcessEnvironment, VersionControl};
