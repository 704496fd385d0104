// src/logging.rs

//! `tracing` subscriber for the `byexample` binary.
//!
//! The filter is taken from, in order:
//! 1. `--log-level`, applied to every target
//! 2. `BYEXAMPLE_LOG`, read as `EnvFilter` directives, so
//!    `BYEXAMPLE_LOG=warn,byexample::exec=debug` narrows to the runner
//! 3. `info`
//!
//! Output goes to stderr. stdout is reserved for rendered pages.

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

const LOG_ENV: &str = "BYEXAMPLE_LOG";

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(cli_level, env.as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    Ok(())
}

fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    match (cli_level, env) {
        (Some(level), _) => builder.parse_lossy(level_directive(level)),
        (None, Some(directives)) => builder.parse_lossy(directives),
        (None, None) => builder.parse_lossy(""),
    }
}

fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
