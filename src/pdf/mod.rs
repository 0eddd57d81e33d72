//! PDF export of the generated document.
//!
//! # Architecture
//!
//! - [`types`] - `ConversionTool`, `ExportPolicy`, `ConversionResult`, `PdfExport`
//! - [`discovery`] - PATH lookup of converter executables
//! - [`executor`] - Running converter processes
//!
//! # Export flow
//!
//! ```text
//!   document.docx
//!        │
//!        ▼
//!   ┌──────────────────────────────┐  none found
//!   │ discover OfficeToPDF/soffice │───────────► PdfError::NoConverter
//!   └──────────────────────────────┘
//!        │                    │
//!   OfficeToPDF            soffice
//!   (authoritative)        (best effort)
//!        │                    │
//!        ▼                    ▼
//!   capture output        run attached,
//!   keep exit code        warn on failure
//!        │                    │
//!        ▼                    ▼
//!   PdfExport::Converted  PdfExport::BestEffort
//! ```
//!
//! Nothing here exits the process; the entry point decides the exit code
//! from the returned [`PdfExport`] or [`PdfError`].

pub mod discovery;
pub mod executor;
pub mod types;

pub use discovery::{PathLocator, ToolLocator, discover};
pub use types::{ConversionTool, ExportPolicy, PdfExport};

use types::{output_dir, pdf_target};

use crate::error::PdfError;
use crate::ui;
use log::{debug, warn};
use std::path::Path;

/// Convert `document` to PDF with the best converter `locator` can find.
///
/// Launch failures are final: a tool that was found but cannot be started
/// is not replaced by the next one.
pub fn export_pdf(document: &Path, locator: &dyn ToolLocator) -> Result<PdfExport, PdfError> {
    let pdf_path = pdf_target(document);
    debug!("Exporting {:?} to {:?}", document, pdf_path);

    let Some((tool, program)) = discover(locator) else {
        return Err(PdfError::NoConverter);
    };
    let args = tool.arguments(document, &pdf_path);

    match tool.policy() {
        ExportPolicy::Authoritative => {
            ui::status(&format!("Found {}, using it. Make sure you have MS Word installed.", tool));
            let result = executor::run_captured(tool, &program, &args)?;
            Ok(PdfExport::Converted { tool, pdf_path, result })
        }
        ExportPolicy::BestEffort => {
            ui::status(&format!("Found {}, using it.", tool));
            let status = executor::run_inherited(tool, &program, &args)?;
            // The PDF is not verified; the converter reports its own problems.
            if !status.success() {
                warn!("{} exited with {:?}", tool, status.code());
                ui::print_warning(&format!("{} reported a failure ({}); check its output above", tool, status));
            }
            Ok(PdfExport::BestEffort { tool, out_dir: output_dir(document), status: status.code() })
        }
    }
}
