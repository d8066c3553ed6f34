// Subsetting job: the set of paths one run operates on

use std::path::{Path, PathBuf};

/// Source font expected in the working directory
pub const DEFAULT_INPUT_FONT: &str = "PretendardVariable.woff2";

/// Characters to retain, expected in the working directory
pub const DEFAULT_GLYPHS_FILE: &str = "glyphs.txt";

/// Created on demand before the tool runs
pub const DEFAULT_OUTPUT_DIR: &str = "./subset-fonts-output";

/// One subsetting job
///
/// The output font path is derived from the output directory and the
/// input font's file name, so it is never set independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetJob {
    pub input_font: PathBuf,
    pub glyphs_file: PathBuf,
    pub output_dir: PathBuf,
}

impl SubsetJob {
    pub fn new(
        input_font: impl Into<PathBuf>,
        glyphs_file: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_font: input_font.into(),
            glyphs_file: glyphs_file.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Rebase every relative path onto `root`
    pub fn rooted_at(&self, root: &Path) -> Self {
        Self {
            input_font: root.join(&self.input_font),
            glyphs_file: root.join(&self.glyphs_file),
            output_dir: root.join(&self.output_dir),
        }
    }

    pub fn output_font(&self) -> PathBuf {
        let file_name = self
            .input_font
            .file_name()
            .unwrap_or_else(|| DEFAULT_INPUT_FONT.as_ref());
        self.output_dir.join(file_name)
    }
}

impl Default for SubsetJob {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_FONT, DEFAULT_GLYPHS_FILE, DEFAULT_OUTPUT_DIR)
    }
}
