// Subset Service - runs one subsetting job end to end


use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{SizeReport, SubsetCommand, SubsetJob, SubsetOutcome};
use crate::error::{InputKind, Result, SubsetError};
use crate::port::{FileSystem, RunError, ToolRunner};

/// Subset Service
///
/// `START -> preconditions -> output dir -> invoke -> report`, no retry.
pub struct SubsetService {
    tool: String,
    runner: Arc<dyn ToolRunner>,
    fs: Arc<dyn FileSystem>,
}

impl SubsetService {
    pub fn new(tool: impl Into<String>, runner: Arc<dyn ToolRunner>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            tool: tool.into(),
            runner,
            fs,
        }
    }

    /// Run the whole job
    pub async fn run(&self, job: &SubsetJob) -> Result<SubsetOutcome> {
        self.prepare(job)?;
        self.execute(job).await
    }

    /// Everything that must hold before the tool is invoked
    pub fn prepare(&self, job: &SubsetJob) -> Result<()> {
        self.check_preconditions(job)?;
        self.prepare_output_dir(job)
    }

    /// Font first, then glyph list; the first missing one is reported
    pub fn check_preconditions(&self, job: &SubsetJob) -> Result<()> {
        for (kind, path) in [
            (InputKind::Font, &job.input_font),
            (InputKind::GlyphList, &job.glyphs_file),
        ] {
            if !self.fs.exists(path) {
                warn!(kind = %kind, path = %path.display(), "Required input missing");
                return Err(SubsetError::MissingInputFile {
                    kind,
                    path: path.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn prepare_output_dir(&self, job: &SubsetJob) -> Result<()> {
        debug!(output_dir = %job.output_dir.display(), "Ensuring output directory");
        self.fs.create_dir_all(&job.output_dir)?;
        Ok(())
    }

    /// Invoke the tool and interpret its exit status
    pub async fn execute(&self, job: &SubsetJob) -> Result<SubsetOutcome> {
        let command = SubsetCommand::for_job(self.tool.clone(), job);

        let output = self.runner.run(&command).await.map_err(|e| match e {
            RunError::NotFound(tool) => SubsetError::ToolNotFound { tool },
            RunError::SpawnFailed(msg) | RunError::IoError(msg) => SubsetError::Spawn(msg),
        })?;

        if !output.success() {
            warn!(exit_code = ?output.exit_code, "Subsetting tool failed");
            return Err(SubsetError::SubprocessFailure {
                exit_code: output.exit_code,
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }

        let output_font = job.output_font();
        let sizes = if self.fs.exists(&output_font) {
            Some(SizeReport::new(
                self.fs.file_size(&job.input_font)?,
                self.fs.file_size(&output_font)?,
            ))
        } else {
            warn!(output_font = %output_font.display(), "Tool succeeded but output file is missing");
            None
        };

        info!(
            output_font = %output_font.display(),
            input_bytes = ?sizes.map(|s| s.input_bytes),
            output_bytes = ?sizes.map(|s| s.output_bytes),
            "Subsetting completed"
        );

        Ok(SubsetOutcome { output_font, sizes })
    }
}
