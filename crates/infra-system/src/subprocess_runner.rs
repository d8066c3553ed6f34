// Subprocess tool runner
// reason: async-trait, tokio for async process management
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::info;

use fontsubset_core::domain::SubsetCommand;
use fontsubset_core::port::tool_runner::{RunError, ToolOutput, ToolRunner};

/// Subprocess tool runner
/// Spawns the external tool, captures its output and waits with no timeout
#[derive(Debug, Default, Clone)]
pub struct SubprocessToolRunner {
    working_dir: Option<PathBuf>,
}

impl SubprocessToolRunner {
    /// Create a runner that inherits the current working directory
    ///
    /// # Example
    /// ```ignore
    /// let runner = SubprocessToolRunner::new();
    /// let output = runner.run(&command).await?;
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the child in `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Spawn child process and wait for output
    async fn spawn_and_wait(&self, command: &SubsetCommand) -> Result<std::process::Output, RunError> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let child = cmd.spawn().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RunError::NotFound(command.program.clone()),
            _ => RunError::SpawnFailed(e.to_string()),
        })?;

        child
            .wait_with_output()
            .await
            .map_err(|e| RunError::IoError(e.to_string()))
    }

    /// Build tool output from process output
    fn build_output(output: std::process::Output) -> ToolOutput {
        ToolOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

#[async_trait]
impl ToolRunner for SubprocessToolRunner {
    async fn run(&self, command: &SubsetCommand) -> Result<ToolOutput, RunError> {
        let start = Instant::now();

        info!(
            program = %command.program,
            args = ?command.args,
            "Starting subsetting tool"
        );

        let output = Self::build_output(self.spawn_and_wait(command).await?);

        info!(
            program = %command.program,
            duration_ms = %start.elapsed().as_millis(),
            exit_code = ?output.exit_code,
            "Subsetting tool finished"
        );

        Ok(output)
    }
}
