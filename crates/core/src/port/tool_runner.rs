// Tool Runner Port
// Abstraction for invoking the external subsetting tool

use crate::domain::SubsetCommand;
use async_trait::async_trait;
use thiserror::Error;

/// Captured result of a finished tool process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// None if the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Errors raised before the tool produced an exit status
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Program not found: {0}")]
    NotFound(String),

    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Tool Runner trait
///
/// Implementations:
/// - SubprocessToolRunner: spawns the external process and waits for it
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Run the command to completion, capturing stdout and stderr
    ///
    /// A non-zero exit status is NOT an error here; it is reported
    /// through `ToolOutput::exit_code`.
    ///
    /// # Errors
    /// - RunError::NotFound if the program cannot be located
    /// - RunError::SpawnFailed if the process cannot be started for any other reason
    async fn run(&self, command: &SubsetCommand) -> Result<ToolOutput, RunError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock runner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Exit with the given code and captured streams
        Exit {
            code: i32,
            stdout: String,
            stderr: String,
        },
        /// Program is not installed
        NotFound,
    }

    /// Mock Tool Runner for testing
    pub struct MockToolRunner {
        behavior: MockBehavior,
        calls: Arc<Mutex<Vec<SubsetCommand>>>,
        on_success: Option<Box<dyn Fn(&SubsetCommand) + Send + Sync>>,
    }

    impl MockToolRunner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                calls: Arc::new(Mutex::new(Vec::new())),
                on_success: None,
            }
        }

        pub fn new_success() -> Self {
            Self::new_exit(0, "", "")
        }

        pub fn new_exit(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
            Self::new(MockBehavior::Exit {
                code,
                stdout: stdout.into(),
                stderr: stderr.into(),
            })
        }

        pub fn new_not_found() -> Self {
            Self::new(MockBehavior::NotFound)
        }

        /// Side effect run on a zero exit, e.g. writing the output file
        pub fn on_success(mut self, f: impl Fn(&SubsetCommand) + Send + Sync + 'static) -> Self {
            self.on_success = Some(Box::new(f));
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn last_call(&self) -> Option<SubsetCommand> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl ToolRunner for MockToolRunner {
        async fn run(&self, command: &SubsetCommand) -> Result<ToolOutput, RunError> {
            self.calls.lock().unwrap().push(command.clone());

            match &self.behavior {
                MockBehavior::Exit {
                    code,
                    stdout,
                    stderr,
                } => {
                    if *code == 0 {
                        if let Some(f) = &self.on_success {
                            f(command);
                        }
                    }
                    Ok(ToolOutput {
                        exit_code: Some(*code),
                        stdout: stdout.clone(),
                        stderr: stderr.clone(),
                    })
                }
                MockBehavior::NotFound => Err(RunError::NotFound(command.program.clone())),
            }
        }
    }
}
