// src/exec/mod.rs

//! Process execution layer.
//!
//! Runs an example's source file through its interpreter with
//! `tokio::process::Command` and captures a console-style transcript.
//!
//! - [`runner`] holds the [`ExecutionRunner`] trait and the production
//!   [`ProcessRunner`]. Tests can substitute a fake that returns a canned
//!   transcript without spawning anything.

pub mod runner;

pub use runner::{ExecutionRunner, ProcessRunner};
