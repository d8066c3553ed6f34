// Application Layer - Use Cases

pub mod subsetting;

// Re-exports
pub use subsetting::SubsetService;
