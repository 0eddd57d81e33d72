//! Converter process execution.
//!
//! Both calls block until the child exits. No timeout is applied: a
//! converter that hangs keeps this process waiting.

use super::types::{ConversionResult, ConversionTool};
use crate::error::PdfError;
use log::debug;
use std::ffi::OsString;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Run a converter with stdout and stderr merged into one captured stream.
///
/// The stream is drained completely before waiting on the child. A child
/// terminated without an exit code reports `1`.
pub fn run_captured(tool: ConversionTool, program: &Path, args: &[OsString]) -> Result<ConversionResult, PdfError> {
    debug!("Running {} {:?} {:?} (captured)", tool, program, args);

    let launch_error = |source| PdfError::Launch { tool, program: program.to_path_buf(), source };
    let capture_error = |source| PdfError::Capture { tool, source };

    let (mut reader, writer) = io::pipe().map_err(launch_error)?;
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdout(writer.try_clone().map_err(launch_error)?);
    cmd.stderr(writer);

    let mut child = cmd.spawn().map_err(launch_error)?;
    // The command still holds our copies of the write end; EOF needs them gone.
    drop(cmd);

    let mut raw = Vec::new();
    let read = reader.read_to_end(&mut raw);
    let status = child.wait().map_err(capture_error)?;
    read.map_err(capture_error)?;

    let result = ConversionResult {
        exit_code: status.code().unwrap_or(1),
        captured_output: String::from_utf8_lossy(&raw).to_string(),
    };
    debug!("{} exited with {} ({} bytes of output)", tool, result.exit_code, raw.len());
    Ok(result)
}

/// Run a converter attached to our terminal and wait for it.
///
/// The returned status is informational only.
pub fn run_inherited(tool: ConversionTool, program: &Path, args: &[OsString]) -> Result<ExitStatus, PdfError> {
    debug!("Running {} {:?} {:?}", tool, program, args);

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| PdfError::Launch { tool, program: program.to_path_buf(), source })?;

    debug!("{} finished with {:?}", tool, status);
    Ok(status)
}
