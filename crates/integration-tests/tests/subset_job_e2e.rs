//! End-to-end subsetting job tests
//!
//! Real filesystem and real child processes; the subsetting tool is a
//! shell stub written into a temporary working directory.
#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fontsubset_core::application::SubsetService;
use fontsubset_core::domain::SubsetJob;
use fontsubset_core::{InputKind, SubsetError};
use fontsubset_infra_system::{LocalFileSystem, SubprocessToolRunner};

const INPUT_BYTES: usize = 2_621_440; // 2.5 MB
const OUTPUT_BYTES: usize = 46_080; // 45 KB

fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Stub that records its argv and writes OUTPUT_BYTES to --output-file
fn succeeding_stub(dir: &Path) -> PathBuf {
    let args_log = dir.join("args.log");
    let body = format!(
        r#"printf '%s\n' "$@" > '{log}'
for arg in "$@"; do
  case "$arg" in
    --output-file=*) head -c {size} /dev/zero > "${{arg#--output-file=}}" ;;
  esac
done"#,
        log = args_log.display(),
        size = OUTPUT_BYTES,
    );
    write_stub(dir, "fake-pyftsubset", &body)
}

fn workspace_with_inputs() -> (tempfile::TempDir, SubsetJob) {
    let dir = tempfile::tempdir().unwrap();
    let job = SubsetJob::default().rooted_at(dir.path());
    std::fs::write(&job.input_font, vec![0u8; INPUT_BYTES]).unwrap();
    std::fs::write(&job.glyphs_file, "가나다abc").unwrap();
    (dir, job)
}

fn service(tool: impl Into<String>) -> SubsetService {
    SubsetService::new(
        tool,
        Arc::new(SubprocessToolRunner::new()),
        Arc::new(LocalFileSystem),
    )
}

#[tokio::test]
async fn test_successful_job_writes_output_and_reports_ratio() {
    let (dir, job) = workspace_with_inputs();
    let tool = succeeding_stub(dir.path());

    let outcome = service(tool.display().to_string()).run(&job).await.unwrap();

    assert!(outcome.output_font.exists());
    assert!(outcome
        .output_font
        .ends_with("subset-fonts-output/PretendardVariable.woff2"));
    let sizes = outcome.sizes.expect("output file on disk");
    assert_eq!(sizes.input_bytes, INPUT_BYTES as u64);
    assert_eq!(sizes.output_bytes, OUTPUT_BYTES as u64);
    assert_eq!(format!("{:.1}", sizes.compression_ratio()), "98.2");
}

#[tokio::test]
async fn test_tool_receives_fixed_arguments() {
    let (dir, job) = workspace_with_inputs();
    let tool = succeeding_stub(dir.path());

    service(tool.display().to_string()).run(&job).await.unwrap();

    let logged = std::fs::read_to_string(dir.path().join("args.log")).unwrap();
    let args: Vec<&str> = logged.lines().collect();
    assert_eq!(args.len(), 15);
    assert_eq!(args[0], job.input_font.display().to_string());
    assert_eq!(args[1], "--flavor=woff2");
    assert_eq!(
        args[2],
        format!("--output-file={}", job.output_font().display())
    );
    assert_eq!(args[3], format!("--text-file={}", job.glyphs_file.display()));
    assert_eq!(
        &args[4..],
        [
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
        ]
    );
}

#[tokio::test]
async fn test_existing_output_dir_is_reused() {
    let (dir, job) = workspace_with_inputs();
    std::fs::create_dir_all(&job.output_dir).unwrap();
    let tool = succeeding_stub(dir.path());

    let outcome = service(tool.display().to_string()).run(&job).await.unwrap();

    assert!(outcome.sizes.is_some());
}

#[tokio::test]
async fn test_missing_glyphs_file_never_invokes_tool() {
    let (dir, job) = workspace_with_inputs();
    std::fs::remove_file(&job.glyphs_file).unwrap();
    let tool = succeeding_stub(dir.path());

    let err = service(tool.display().to_string()).run(&job).await.unwrap_err();

    assert!(matches!(
        err,
        SubsetError::MissingInputFile {
            kind: InputKind::GlyphList,
            ..
        }
    ));
    assert!(!dir.path().join("args.log").exists());
    assert!(!job.output_dir.exists());
}

#[tokio::test]
async fn test_missing_font_never_invokes_tool() {
    let (dir, job) = workspace_with_inputs();
    std::fs::remove_file(&job.input_font).unwrap();
    let tool = succeeding_stub(dir.path());

    let err = service(tool.display().to_string()).run(&job).await.unwrap_err();

    assert!(matches!(
        err,
        SubsetError::MissingInputFile {
            kind: InputKind::Font,
            ..
        }
    ));
    assert!(!dir.path().join("args.log").exists());
    assert!(!job.output_dir.exists());
}

#[tokio::test]
async fn test_failing_tool_exit_code_is_preserved() {
    let (dir, job) = workspace_with_inputs();
    let tool = write_stub(
        dir.path(),
        "broken-pyftsubset",
        "echo 'reading font'\necho 'ERROR: unsupported table' >&2\nexit 42",
    );

    let err = service(tool.display().to_string()).run(&job).await.unwrap_err();

    match err {
        SubsetError::SubprocessFailure {
            exit_code,
            stdout,
            stderr,
        } => {
            assert_eq!(exit_code, Some(42));
            assert!(stdout.contains("reading font"));
            assert!(stderr.contains("unsupported table"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_absent_tool_reports_not_found() {
    let (_dir, job) = workspace_with_inputs();

    let err = service("fontsubset-absent-tool-7d2e")
        .run(&job)
        .await
        .unwrap_err();

    match err {
        SubsetError::ToolNotFound { tool } => assert_eq!(tool, "fontsubset-absent-tool-7d2e"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_tool_success_without_output_file() {
    let (dir, job) = workspace_with_inputs();
    let tool = write_stub(dir.path(), "silent-pyftsubset", "exit 0");

    let outcome = service(tool.display().to_string()).run(&job).await.unwrap();

    assert!(outcome.sizes.is_none());
}
