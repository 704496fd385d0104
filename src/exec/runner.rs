// src/exec/runner.rs

//! Runs an example and captures its transcript.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::ExamplesSection;
use crate::errors::{ByExampleError, Result};

/// Trait abstracting how an example source file is executed.
///
/// The returned transcript starts with `$ <command line>\n` followed by the
/// program's combined stdout/stderr.
pub trait ExecutionRunner: Send + Sync {
    fn run<'a>(
        &'a self,
        source: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

/// Real runner: spawns `<command...> <source>`.
///
/// stdout and stderr are read on separate tasks and merged chunk by chunk
/// in arrival order, so interleaving between the two streams is
/// best-effort. The exit status is logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    command: Vec<String>,
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new(command: Vec<String>, timeout: Option<Duration>) -> Self {
        Self { command, timeout }
    }

    pub fn from_config(section: &ExamplesSection) -> Self {
        Self::new(
            section.command.clone(),
            section.timeout_secs.map(Duration::from_secs),
        )
    }

    async fn run_inner(&self, source: &Path) -> Result<String> {
        let (program, args) = self.command.split_first().ok_or_else(|| {
            ByExampleError::Config("interpreter command is empty".to_string())
        })?;

        let command_line = {
            let mut argv = self.command.clone();
            argv.push(source.display().to_string());
            argv.join(" ")
        };

        info!(command = %command_line, "running example");

        let mut cmd = Command::new(program);
        cmd.args(args)
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|source| ByExampleError::Execution {
            command: command_line.clone(),
            source,
        })?;

        let captured = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, capture(&mut child)).await {
                Ok(res) => res,
                Err(_) => {
                    if let Err(e) = child.kill().await {
                        warn!(command = %command_line, error = %e, "failed to kill timed-out example");
                    }
                    return Err(ByExampleError::ExecutionTimeout {
                        command: command_line,
                        secs: limit.as_secs(),
                    });
                }
            },
            None => capture(&mut child).await,
        };

        let (output, status) = captured.map_err(|source| ByExampleError::Execution {
            command: command_line.clone(),
            source,
        })?;

        if status.success() {
            debug!(command = %command_line, "example exited successfully");
        } else {
            warn!(
                command = %command_line,
                exit_code = status.code().unwrap_or(-1),
                "example exited unsuccessfully; showing its output anyway"
            );
        }

        Ok(format!("$ {command_line}\n{output}"))
    }
}

impl ExecutionRunner for ProcessRunner {
    fn run<'a>(
        &'a self,
        source: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(self.run_inner(source))
    }
}

/// Drain stdout and stderr into one buffer, then reap the child.
async fn capture(child: &mut Child) -> std::io::Result<(String, ExitStatus)> {
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    if let Some(stdout) = child.stdout.take() {
        forward_lines(stdout, tx.clone(), "stdout");
    }
    if let Some(stderr) = child.stderr.take() {
        forward_lines(stderr, tx.clone(), "stderr");
    }
    drop(tx);

    let mut output = String::new();
    while let Some(chunk) = rx.recv().await {
        output.push_str(&chunk);
    }

    let status = child.wait().await?;
    Ok((output, status))
}

fn forward_lines<R>(reader: R, tx: mpsc::UnboundedSender<String>, stream: &'static str)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    if tx.send(String::from_utf8_lossy(&buf).into_owned()).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    debug!(stream, error = %e, "stopped reading example output");
                    break;
                }
            }
        }
    });
}
