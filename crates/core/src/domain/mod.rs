// Domain Layer - Pure job description and metrics

pub mod command;
pub mod job;
pub mod report;

// Re-exports
pub use command::{SubsetCommand, DEFAULT_TOOL, SUBSET_FLAGS};
pub use job::{SubsetJob, DEFAULT_GLYPHS_FILE, DEFAULT_INPUT_FONT, DEFAULT_OUTPUT_DIR};
pub use report::{SizeReport, SubsetOutcome};
