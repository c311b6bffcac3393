//! File boundary for report runs.
//!
//! These are the only functions in the crate that touch the filesystem.
//! The pipeline itself works on in-memory text.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ReportError, ReportResult};
use crate::pipeline::ReportPipeline;
use crate::render::Renderer;

/// Reads the whole input document.
pub fn load_input<P: AsRef<Path>>(path: P) -> ReportResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| io_error(path, e))
}

/// Writes `text` to `path`, replacing any existing file.
///
/// The text goes to a sibling `.tmp` file that is renamed over `path` once
/// fully written, so a failed write never leaves a truncated report.
pub fn write_output<P: AsRef<Path>>(path: P, text: &str) -> ReportResult<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    if let Err(e) = fs::write(&temp_path, text) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error(path, e));
    }
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        io_error(path, e)
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Loads `input`, renders it with `renderer`, and writes the result to `output`.
///
/// The report is rendered completely before anything is written, so a parse
/// or validation failure leaves no output file behind. The write itself goes
/// through [`write_output`], so an I/O failure leaves any previous `output`
/// intact.
pub fn generate_report_file<P, Q>(
    input: P,
    output: Q,
    pipeline: &ReportPipeline,
    renderer: &dyn Renderer,
) -> ReportResult<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let raw = load_input(&input)?;
    let report = pipeline.render_with(&raw, renderer)?;
    write_output(&output, &report)?;

    info!(
        input = %input.as_ref().display(),
        output = %output.as_ref().display(),
        bytes = report.len(),
        "Report written"
    );
    Ok(())
}

fn io_error(path: &Path, error: std::io::Error) -> ReportError {
    ReportError::Io {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
