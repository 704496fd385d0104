// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `byexample`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "byexample",
    version,
    about = "Render annotated, runnable example pages for a static site.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `ByExample.toml` in the current working directory, or
    /// built-in defaults if that file does not exist.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BYEXAMPLE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the source and transcript tables for one example.
    Render {
        /// Example name (directory under a search root).
        #[arg(default_value = "")]
        name: String,

        /// Page title; when given it takes precedence over NAME.
        #[arg(long)]
        title: Option<String>,
    },

    /// Print one build identifier: run_id, ref, commit or short.
    Git { key: String },

    /// Expand `include_example` and `git` tags inside a page.
    Expand {
        page: PathBuf,

        #[arg(long)]
        title: Option<String>,

        /// Write here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Validate the config and list the examples each search root provides.
    Check,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
