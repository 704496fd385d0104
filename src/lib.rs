// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod example;
pub mod exec;
pub mod fs;
pub mod git;
pub mod logging;
pub mod markup;
pub mod template;
pub mod types;

use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::{load_or_default, ConfigFile};
use crate::errors::Result;
use crate::example::{ExampleLocator, ExampleTagHandler, PageContext, TableRenderer};
use crate::exec::ProcessRunner;
use crate::fs::{FileSystem, RealFileSystem};
use crate::git::{GitCli, GitKey, GitMetadataCache, GitMetadataProvider, ProcessEnvironment};
use crate::markup::ComrakMarkup;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - locator / runner / renderer behind the example tag
/// - the git metadata provider
pub async fn run(args: CliArgs) -> Result<()> {
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let cfg = load_or_default(&*fs, args.config.as_deref())?;
    debug!(?cfg, "loaded config");

    match args.command {
        Command::Render { name, title } => {
            let handler = build_example_handler(&cfg, Arc::clone(&fs));
            let page = PageContext { title };
            print!("{}", handler.render(&page, &name).await?);
        }
        Command::Git { key } => {
            let key: GitKey = key.parse()?;
            let mut git = default_git_provider();
            println!("{}", git.get(key).await?);
        }
        Command::Expand {
            page,
            title,
            output,
        } => {
            let handler = build_example_handler(&cfg, Arc::clone(&fs));
            let mut git = default_git_provider();
            let text = fs.read_to_string(&page)?;
            let context = PageContext { title };
            let expanded = template::expand(&text, &context, &handler, &mut git).await?;

            match output {
                Some(path) => {
                    fs.write(&path, expanded.as_bytes())?;
                    info!(page = %page.display(), output = %path.display(), "expanded page");
                }
                None => print!("{expanded}"),
            }
        }
        Command::Check => print_check(&cfg, fs)?,
    }

    Ok(())
}

/// Build the `include_example` handler from config with production
/// collaborators (process runner, comrak markup).
pub fn build_example_handler(cfg: &ConfigFile, fs: Arc<dyn FileSystem>) -> ExampleTagHandler {
    let markup = Arc::new(ComrakMarkup::from_config(&cfg.markup));
    let renderer = TableRenderer::new(markup.clone(), markup, cfg.playground.clone());
    let locator = ExampleLocator::new(Arc::clone(&fs), cfg.examples.search_roots.clone());
    let runner = Arc::new(ProcessRunner::from_config(&cfg.examples));
    ExampleTagHandler::new(fs, locator, runner, renderer)
}

/// Git provider reading the real environment and shelling out to `git`.
pub fn default_git_provider() -> GitMetadataProvider {
    GitMetadataProvider::new(
        GitMetadataCache::new(),
        Arc::new(ProcessEnvironment),
        Arc::new(GitCli::new()),
    )
}

/// Print the effective config and the examples each root provides.
fn print_check(cfg: &ConfigFile, fs: Arc<dyn FileSystem>) -> Result<()> {
    let locator = ExampleLocator::new(fs, cfg.examples.search_roots.clone());

    println!("byexample check");
    println!("  examples.command = {:?}", cfg.examples.command);
    match cfg.examples.timeout_secs {
        Some(secs) => println!("  examples.timeout_secs = {secs}"),
        None => println!("  examples.timeout_secs = none"),
    }
    println!("  playground.enabled = {}", cfg.playground.enabled);
    println!("  markup.theme = {}", cfg.markup.theme);
    println!();

    for root in locator.roots() {
        let bundles = locator.list(root)?;
        println!("{root} ({}):", bundles.len());
        for bundle in bundles {
            println!("  - {}", bundle.name);
        }
    }

    Ok(())
}
