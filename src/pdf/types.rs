//! Core types for PDF export.
//!
//! This module defines the converter tools we know about, the policy each
//! one is run under, and the outcomes an export can have.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// How much the coordinator trusts a converter's exit status.
///
/// ```text
/// ExportPolicy::Authoritative → output captured and printed,
///                               exit code becomes the process exit code
///
/// ExportPolicy::BestEffort    → output goes straight to the terminal,
///                               exit code only produces a warning
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPolicy {
    Authoritative,
    BestEffort,
}

/// External converters able to turn the generated docx into a PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionTool {
    /// OfficeToPDF, drives an installed MS Word
    OfficeToPdf,
    /// LibreOffice / OpenOffice headless converter
    Soffice,
}

impl ConversionTool {
    /// Discovery order; the first tool found on the host wins.
    pub const PRIORITY: [ConversionTool; 2] = [ConversionTool::OfficeToPdf, ConversionTool::Soffice];

    /// Executable name looked up on PATH
    pub fn program_name(&self) -> &'static str {
        match self {
            ConversionTool::OfficeToPdf => "OfficeToPDF",
            ConversionTool::Soffice => "soffice",
        }
    }

    pub fn policy(&self) -> ExportPolicy {
        match self {
            ConversionTool::OfficeToPdf => ExportPolicy::Authoritative,
            ConversionTool::Soffice => ExportPolicy::BestEffort,
        }
    }

    /// Command-line arguments converting `document` into `pdf_path`.
    ///
    /// soffice cannot name its output file, it writes `<stem>.pdf` into the
    /// directory holding `pdf_path`.
    pub fn arguments(&self, document: &Path, pdf_path: &Path) -> Vec<OsString> {
        match self {
            ConversionTool::OfficeToPdf => vec![
                "/bookmarks".into(),
                "/print".into(),
                document.as_os_str().to_owned(),
                pdf_path.as_os_str().to_owned(),
            ],
            ConversionTool::Soffice => vec![
                "--convert-to".into(),
                "pdf".into(),
                "--outdir".into(),
                output_dir(pdf_path).into_os_string(),
                document.as_os_str().to_owned(),
            ],
        }
    }
}

impl fmt::Display for ConversionTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program_name())
    }
}

/// Captured run of an authoritative converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// Child exit code; 1 when it was terminated without one
    pub exit_code: i32,
    /// Interleaved stdout and stderr, lossily decoded
    pub captured_output: String,
}

/// Outcome of a PDF export attempt that got as far as running a converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfExport {
    /// An authoritative converter ran; its exit code decides the process exit
    Converted { tool: ConversionTool, pdf_path: PathBuf, result: ConversionResult },

    /// A best-effort converter ran; the PDF is expected in `out_dir`
    BestEffort { tool: ConversionTool, out_dir: PathBuf, status: Option<i32> },
}

impl PdfExport {
    /// Process exit code implied by this export.
    ///
    /// Best-effort exports never force a failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            PdfExport::Converted { result, .. } => result.exit_code,
            PdfExport::BestEffort { .. } => 0,
        }
    }
}

/// Target PDF path: the document path with its extension replaced by `.pdf`
pub fn pdf_target(document: &Path) -> PathBuf {
    document.with_extension("pdf")
}

/// Directory the document (and a best-effort PDF) lives in
pub fn output_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
