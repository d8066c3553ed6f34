// Size comparison between the source font and the subset

use std::path::PathBuf;

const BYTES_PER_KB: f64 = 1024.0;
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// On-disk sizes of the input and output fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub input_bytes: u64,
    pub output_bytes: u64,
}

impl SizeReport {
    pub fn new(input_bytes: u64, output_bytes: u64) -> Self {
        Self {
            input_bytes,
            output_bytes,
        }
    }

    pub fn input_mb(&self) -> f64 {
        self.input_bytes as f64 / BYTES_PER_MB
    }

    pub fn output_kb(&self) -> f64 {
        self.output_bytes as f64 / BYTES_PER_KB
    }

    /// `(1 - output_kb / (input_mb * 1024)) * 100`
    ///
    /// Reduces to `(1 - out/in) * 100`. An empty input reports 0.0.
    pub fn compression_ratio(&self) -> f64 {
        let input_kb = self.input_mb() * 1024.0;
        if input_kb == 0.0 {
            return 0.0;
        }
        (1.0 - self.output_kb() / input_kb) * 100.0
    }
}

/// Result of a successful job
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetOutcome {
    pub output_font: PathBuf,
    /// None when the tool exited cleanly but left no file behind
    pub sizes: Option<SizeReport>,
}
