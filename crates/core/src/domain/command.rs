// Subsetting command: program plus the fixed argument list

use super::job::SubsetJob;
use std::ffi::OsString;

/// fonttools' subsetter, resolved through PATH
pub const DEFAULT_TOOL: &str = "pyftsubset";

/// Retention policy passed after the path arguments, in this order
///
/// Changing any of these silently changes which tables, glyphs and names
/// survive subsetting.
pub const SUBSET_FLAGS: [&str; 11] = [
    "--layout-features=*",
    "--glyph-names",
    "--symbol-cmap",
    "--legacy-cmap",
    "--notdef-glyph",
    "--notdef-outline",
    "--recommended-glyphs",
    "--name-legacy",
    "--drop-tables=",
    "--name-IDs=*",
    "--name-languages=*",
];

/// A fully built invocation of the external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl SubsetCommand {
    pub fn new(program: impl Into<String>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build the invocation for `job`
    pub fn for_job(program: impl Into<String>, job: &SubsetJob) -> Self {
        let mut output_file = OsString::from("--output-file=");
        output_file.push(job.output_font());

        let mut text_file = OsString::from("--text-file=");
        text_file.push(&job.glyphs_file);

        let mut args = vec![
            job.input_font.clone().into_os_string(),
            OsString::from("--flavor=woff2"),
            output_file,
            text_file,
        ];
        args.extend(SUBSET_FLAGS.iter().map(OsString::from));

        Self::new(program, args)
    }
}
