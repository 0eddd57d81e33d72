//! Report builder boundary.
//!
//! The document itself (parsing allure results, laying out paragraphs and
//! tables) is produced by an external builder. This module defines the
//! contract the pipeline calls and the adapter that drives a builder
//! executable.

use crate::error::BuildError;
use crate::types::ReportRequest;
use log::debug;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Produces the document at `request.output_path`.
///
/// Either the whole document is written or an error is returned; there is
/// no partial success. Nothing is cleaned up after a failure.
pub trait ReportBuilder {
    fn build(&self, request: &ReportRequest) -> Result<(), BuildError>;
}

/// Runs an external builder program with the request as JSON on stdin.
///
/// The builder's own stdout and stderr go straight to the terminal.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    program: PathBuf,
}

impl CommandBuilder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ReportBuilder for CommandBuilder {
    fn build(&self, request: &ReportRequest) -> Result<(), BuildError> {
        let payload = serde_json::to_vec(request)?;
        debug!("Running report builder {:?} for {:?}", self.program, request.output_path);

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| BuildError::Launch { program: self.program.clone(), source })?;

        // Dropping stdin closes the pipe so the builder sees EOF.
        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = stdin.write_all(&payload)
        {
            // A builder may exit without reading its input; its status decides then.
            if e.kind() == io::ErrorKind::BrokenPipe {
                debug!("Report builder closed stdin early: {}", e);
            } else {
                let _ = child.wait();
                return Err(BuildError::Stdin(e));
            }
        }

        let status = child.wait().map_err(|source| BuildError::Launch { program: self.program.clone(), source })?;
        if !status.success() {
            return Err(BuildError::Failed { code: status.code() });
        }

        debug!("Report builder finished for {:?}", request.output_path);
        Ok(())
    }
}
