//! Command-line configuration
//!
//! Every option defaults to the fixed job layout, so a bare `fontsubset`
//! run subsets `PretendardVariable.woff2` with `glyphs.txt`.

use clap::Parser;
use std::path::PathBuf;

use fontsubset_core::domain::{
    SubsetJob, DEFAULT_GLYPHS_FILE, DEFAULT_INPUT_FONT, DEFAULT_OUTPUT_DIR, DEFAULT_TOOL,
};

#[derive(Parser, Debug)]
#[command(name = "fontsubset")]
#[command(about = "Subset a variable web font to the glyphs listed in a text file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Source font
    #[arg(long, env = "FONTSUBSET_INPUT_FONT", default_value = DEFAULT_INPUT_FONT)]
    pub input_font: PathBuf,

    /// Text file with the characters to keep
    #[arg(long, env = "FONTSUBSET_GLYPHS_FILE", default_value = DEFAULT_GLYPHS_FILE)]
    pub glyphs_file: PathBuf,

    /// Directory the subset font is written to (created if missing)
    #[arg(long, env = "FONTSUBSET_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Subsetting executable, looked up on PATH
    #[arg(long, env = "FONTSUBSET_TOOL", default_value = DEFAULT_TOOL)]
    pub tool: String,
}

impl Cli {
    pub fn job(&self) -> SubsetJob {
        SubsetJob::new(&self.input_font, &self.glyphs_file, &self.output_dir)
    }
}
