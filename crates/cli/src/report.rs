//! Console rendering of job progress and results

use colored::Colorize;
use std::io::{self, Write};

use fontsubset_core::domain::{SubsetJob, SubsetOutcome};
use fontsubset_core::SubsetError;

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "🎨 Font Subsetter".cyan().bold())?;
    writeln!(out, "{}", "=".repeat(50))
}

pub fn job_started(out: &mut impl Write, job: &SubsetJob) -> io::Result<()> {
    writeln!(out, "{}", "🚀 Starting font subsetting...".bold())?;
    writeln!(out, "📁 Input font: {}", job.input_font.display())?;
    writeln!(out, "📄 Glyph list: {}", job.glyphs_file.display())?;
    writeln!(out, "📁 Output: {}", job.output_font().display())?;
    writeln!(out)
}

pub fn outcome(out: &mut impl Write, result: &Result<SubsetOutcome, SubsetError>) -> io::Result<()> {
    match result {
        Ok(outcome) => success(out, outcome),
        Err(err) => failure(out, err),
    }
}

fn success(out: &mut impl Write, outcome: &SubsetOutcome) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "✅ Font subsetting completed successfully!".green().bold()
    )?;
    writeln!(out, "📊 Output file: {}", outcome.output_font.display())?;

    if let Some(sizes) = &outcome.sizes {
        writeln!(out, "📈 Size comparison:")?;
        writeln!(out, "   Original size: {:.1} MB", sizes.input_mb())?;
        writeln!(out, "   Subset size: {:.1} KB", sizes.output_kb())?;
        writeln!(out, "   Compression: {:.1}%", sizes.compression_ratio())?;
    }
    Ok(())
}

fn failure(out: &mut impl Write, err: &SubsetError) -> io::Result<()> {
    match err {
        SubsetError::MissingInputFile { kind, path } => {
            writeln!(
                out,
                "{} could not find {} '{}'",
                "❌ Error:".red().bold(),
                kind,
                path.display()
            )?;
        }
        SubsetError::SubprocessFailure {
            exit_code,
            stdout,
            stderr,
        } => {
            writeln!(
                out,
                "{} font subsetting failed",
                "❌ Error:".red().bold()
            )?;
            match exit_code {
                Some(code) => writeln!(out, "Exit code: {}", code)?,
                None => writeln!(out, "Exit code: none (terminated by signal)")?,
            }
            if !stdout.is_empty() {
                writeln!(out, "Output: {}", stdout)?;
            }
            if !stderr.is_empty() {
                writeln!(out, "Error output: {}", stderr)?;
            }
        }
        SubsetError::ToolNotFound { tool } => {
            writeln!(
                out,
                "{} could not find the '{}' command",
                "❌ Error:".red().bold(),
                tool
            )?;
            writeln!(out, "{}", "💡 To fix this:".yellow())?;
            writeln!(
                out,
                "   1. Make sure fonttools is installed: pip install fonttools"
            )?;
            writeln!(out, "   2. Make sure your virtual environment is activated")?;
        }
        other => {
            writeln!(out, "{} {}", "❌ Error:".red().bold(), other)?;
        }
    }
    Ok(())
}

pub fn finished(out: &mut impl Write, ok: bool) -> io::Result<()> {
    writeln!(out)?;
    if ok {
        writeln!(out, "{}", "🎉 All tasks completed!".green().bold())
    } else {
        writeln!(out, "{}", "💥 Task failed.".red().bold())
    }
}
