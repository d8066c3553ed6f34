// Font Subsetter Infrastructure - System Adapters
// Implements: ToolRunner, FileSystem

pub mod local_file_system;
pub mod subprocess_runner;

pub use local_file_system::LocalFileSystem;
pub use subprocess_runner::SubprocessToolRunner;
