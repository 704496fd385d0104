#![allow(dead_code)]

use std::sync::Arc;

use byexample::config::{ConfigFile, RawConfigFile};
use byexample::example::{ExampleLocator, ExampleTagHandler, TableRenderer};
use byexample::exec::ExecutionRunner;
use byexample::fs::FileSystem;
use byexample::fs::mock::MockFileSystem;

use crate::fake_markup::EchoMarkup;
use crate::fake_runner::FakeRunner;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    /// Replace the default `["examples"]` roots.
    pub fn with_roots(mut self, roots: &[&str]) -> Self {
        self.config.examples.search_roots = roots.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_command(mut self, argv: &[&str]) -> Self {
        self.config.examples.command = argv.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.config.examples.timeout_secs = Some(secs);
        self
    }

    pub fn without_playground(mut self) -> Self {
        self.config.playground.enabled = false;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for an `ExampleTagHandler` wired to fakes: a mock filesystem,
/// [`EchoMarkup`] and a [`FakeRunner`] unless overridden.
pub struct HandlerBuilder {
    config: ConfigFile,
    fs: MockFileSystem,
    runner: Arc<dyn ExecutionRunner>,
}

impl HandlerBuilder {
    pub fn new(fs: MockFileSystem) -> Self {
        Self {
            config: ConfigFileBuilder::new().build(),
            fs,
            runner: Arc::new(FakeRunner::new("")),
        }
    }

    pub fn config(mut self, config: ConfigFile) -> Self {
        self.config = config;
        self
    }

    pub fn runner(mut self, runner: Arc<dyn ExecutionRunner>) -> Self {
        self.runner = runner;
        self
    }

    pub fn build(self) -> ExampleTagHandler {
        let fs: Arc<dyn FileSystem> = Arc::new(self.fs);
        let markup = Arc::new(EchoMarkup);
        let renderer = TableRenderer::new(markup.clone(), markup, self.config.playground.clone());
        let locator = ExampleLocator::new(Arc::clone(&fs), self.config.examples.search_roots.clone());
        ExampleTagHandler::new(fs, locator, self.runner, renderer)
    }
}
