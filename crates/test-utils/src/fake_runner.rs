use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use byexample::errors::Result;
use byexample::exec::ExecutionRunner;

/// A fake runner that:
/// - records which source paths were "run"
/// - returns `$ ruby <path>\n` followed by a canned output.
#[derive(Clone)]
pub struct FakeRunner {
    output: String,
    executed: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeRunner {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            executed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn executed(&self) -> Vec<PathBuf> {
        self.executed.lock().unwrap().clone()
    }
}

impl ExecutionRunner for FakeRunner {
    fn run<'a>(
        &'a self,
        source: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.executed.lock().unwrap().push(source.to_path_buf());
            Ok(format!("$ ruby {}\n{}", source.display(), self.output))
        })
    }
}
