// Port Layer - Interfaces for external dependencies

pub mod file_system;
pub mod tool_runner;

// Re-exports
pub use file_system::FileSystem;
pub use tool_runner::{RunError, ToolOutput, ToolRunner};
