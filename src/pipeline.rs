/// Report pipeline
///
/// Runs one invocation end to end:
/// resolved request → report builder → optional PDF export.
///
/// Every step blocks until done. A failed build stops the pipeline before
/// any PDF work.
use crate::builder::ReportBuilder;
use crate::error::AppError;
use crate::pdf::{self, PdfExport, ToolLocator};
use crate::types::RunConfig;
use log::debug;
use std::path::PathBuf;

/// What a successful invocation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Document written, no PDF requested
    Document { path: PathBuf },
    /// Document written and a converter ran
    Exported { document: PathBuf, export: PdfExport },
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Document { .. } => 0,
            Outcome::Exported { export, .. } => export.exit_code(),
        }
    }
}

/// Build the report and, if requested, export it to PDF
pub fn run(config: &RunConfig, builder: &dyn ReportBuilder, locator: &dyn ToolLocator) -> Result<Outcome, AppError> {
    let request = &config.request;
    println!("Template: {}", request.template_path.display());

    builder.build(request)?;
    debug!("Document written to {:?}", request.output_path);

    if !config.export_pdf {
        return Ok(Outcome::Document { path: request.output_path.clone() });
    }

    let export = pdf::export_pdf(&request.output_path, locator)?;
    Ok(Outcome::Exported { document: request.output_path.clone(), export })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
