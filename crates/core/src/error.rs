// Central Error Type for the Subsetting Job

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two required inputs is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Font,
    GlyphList,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Font => write!(f, "input font file"),
            InputKind::GlyphList => write!(f, "glyph list file"),
        }
    }
}

/// Job-level error type
///
/// Every variant is terminal: the CLI renders it once and exits with code 1.
#[derive(Error, Debug)]
pub enum SubsetError {
    #[error("{kind} '{}' not found", path.display())]
    MissingInputFile { kind: InputKind, path: PathBuf },

    #[error("subsetting tool exited with code {}", exit_code.map_or_else(|| "<signal>".to_string(), |c| c.to_string()))]
    SubprocessFailure {
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("subsetting tool '{tool}' not found")]
    ToolNotFound { tool: String },

    #[error("Spawn failed: {0}")]
    Spawn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using SubsetError
pub type Result<T> = std::result::Result<T, SubsetError>;
