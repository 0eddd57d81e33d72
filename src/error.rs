//! Error types for the report pipeline.
//!
//! Every failure is terminal for the invocation. Only `main` turns an error
//! into a process exit code, via [`AppError::exit_code`].

use crate::pdf::ConversionTool;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code when `--pdf` was requested but no converter is installed
pub const EXIT_NO_CONVERTER: i32 = 1;
/// Exit code for a failed report build
pub const EXIT_BUILD_FAILED: i32 = 3;
/// Exit code when a discovered converter could not be started
pub const EXIT_CONVERTER_LAUNCH: i32 = 4;

/// The report builder did not produce a document.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to start report builder {program:?}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to hand the report request to the builder: {0}")]
    Request(#[from] serde_json::Error),

    #[error("failed to write the report request to the builder: {0}")]
    Stdin(#[source] io::Error),

    #[error("report builder exited with {}", describe_code(.code))]
    Failed { code: Option<i32> },
}

/// PDF export could not run to completion.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Could not find neither OfficeToPDF nor soffice. Not generating PDF.")]
    NoConverter,

    #[error("failed to start {tool} ({program:?}): {source}")]
    Launch {
        tool: ConversionTool,
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read output of {tool}: {source}")]
    Capture {
        tool: ConversionTool,
        #[source]
        source: io::Error,
    },
}

/// Any failure surfaced to the entry point
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Report generation failed: {0}")]
    Build(#[from] BuildError),

    #[error(transparent)]
    Pdf(#[from] PdfError),
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Build(_) => EXIT_BUILD_FAILED,
            AppError::Pdf(PdfError::NoConverter) => EXIT_NO_CONVERTER,
            AppError::Pdf(PdfError::Launch { .. } | PdfError::Capture { .. }) => EXIT_CONVERTER_LAUNCH,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let no_converter = AppError::from(PdfError::NoConverter);
        let build = AppError::from(BuildError::Failed { code: Some(2) });
        let launch = AppError::from(PdfError::Launch {
            tool: ConversionTool::OfficeToPdf,
            program: PathBuf::from("/usr/bin/OfficeToPDF"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        });

        assert_eq!(no_converter.exit_code(), 1);
        assert_eq!(build.exit_code(), 3);
        assert_eq!(launch.exit_code(), 4);
    }

    #[test]
    fn test_no_converter_message() {
        let msg = AppError::from(PdfError::NoConverter).to_string();
        assert!(msg.contains("Could not find"));
        assert!(msg.contains("OfficeToPDF"));
        assert!(msg.contains("soffice"));
    }

    #[test]
    fn test_build_failure_message_mentions_status() {
        assert_eq!(BuildError::Failed { code: Some(5) }.to_string(), "report builder exited with status 5");
        assert!(BuildError::Failed { code: None }.to_string().contains("signal"));
    }
}
