/// Tests for pipeline module
#[cfg(test)]
mod tests {
    use crate::builder::ReportBuilder;
    use crate::error::{AppError, BuildError, PdfError};
    use crate::pdf::{ConversionTool, PdfExport, ToolLocator};
    use crate::pipeline::{Outcome, run};
    use crate::types::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// Builder that records every request and optionally fails
    #[derive(Default)]
    struct RecordingBuilder {
        requests: RefCell<Vec<ReportRequest>>,
        fail_with: Option<i32>,
    }

    impl ReportBuilder for RecordingBuilder {
        fn build(&self, request: &ReportRequest) -> Result<(), BuildError> {
            self.requests.borrow_mut().push(request.clone());
            match self.fail_with {
                Some(code) => Err(BuildError::Failed { code: Some(code) }),
                None => Ok(()),
            }
        }
    }

    /// Locator that records every lookup
    #[derive(Default)]
    struct RecordingLocator {
        tools: HashMap<&'static str, PathBuf>,
        lookups: RefCell<Vec<String>>,
    }

    impl ToolLocator for RecordingLocator {
        fn locate(&self, program: &str) -> Option<PathBuf> {
            self.lookups.borrow_mut().push(program.to_string());
            self.tools.get(program).cloned()
        }
    }

    fn create_config(export_pdf: bool) -> RunConfig {
        RunConfig {
            request: ReportRequest {
                input_dir: PathBuf::from("/work/allure-results"),
                output_path: PathBuf::from("/work/out/report.docx"),
                template_path: PathBuf::from("/opt/allure-docx/template.docx"),
                config_profile: ConfigProfile::default(),
                title: None,
                logo_path: None,
                logo_height_cm: Some(2.5),
            },
            export_pdf,
            builder_program: PathBuf::from("allure-docx-builder"),
        }
    }

    #[test]
    fn test_without_pdf_only_builds() {
        let builder = RecordingBuilder::default();
        let locator = RecordingLocator::default();

        let outcome = run(&create_config(false), &builder, &locator).unwrap();

        assert_eq!(outcome, Outcome::Document { path: PathBuf::from("/work/out/report.docx") });
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(builder.requests.borrow().len(), 1);
        assert!(locator.lookups.borrow().is_empty(), "No converter lookup without --pdf");
    }

    #[test]
    fn test_builder_gets_resolved_request() {
        let builder = RecordingBuilder::default();
        let config = create_config(false);

        run(&config, &builder, &RecordingLocator::default()).unwrap();

        let requests = builder.requests.borrow();
        assert_eq!(requests[0], config.request);
        assert_eq!(requests[0].logo_height_cm, Some(2.5));
    }

    #[test]
    fn test_no_converter_after_successful_build() {
        let builder = RecordingBuilder::default();
        let locator = RecordingLocator::default();

        let err = run(&create_config(true), &builder, &locator).unwrap_err();

        assert!(matches!(err, AppError::Pdf(PdfError::NoConverter)));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(builder.requests.borrow().len(), 1, "Report is still built");
        assert_eq!(*locator.lookups.borrow(), vec!["OfficeToPDF", "soffice"], "Lookups follow priority order");
    }

    #[test]
    fn test_build_failure_skips_pdf() {
        let builder = RecordingBuilder { fail_with: Some(2), ..Default::default() };
        let locator = RecordingLocator::default();

        let err = run(&create_config(true), &builder, &locator).unwrap_err();

        assert!(matches!(err, AppError::Build(BuildError::Failed { code: Some(2) })));
        assert_eq!(err.exit_code(), 3);
        assert!(locator.lookups.borrow().is_empty(), "PDF export must not run after a failed build");
    }

    #[test]
    fn test_found_converter_that_cannot_start() {
        let builder = RecordingBuilder::default();
        let locator = RecordingLocator {
            tools: HashMap::from([("soffice", PathBuf::from("/nonexistent/allure-docx/soffice"))]),
            ..Default::default()
        };

        let err = run(&create_config(true), &builder, &locator).unwrap_err();

        assert!(matches!(err, AppError::Pdf(PdfError::Launch { tool: ConversionTool::Soffice, .. })));
        assert_eq!(err.exit_code(), 4);
    }

    #[cfg(unix)]
    #[test]
    fn test_best_effort_export_returns_output_directory() {
        use std::os::unix::fs::PermissionsExt;

        let tools = tempfile::TempDir::new().unwrap();
        let soffice = tools.path().join("soffice");
        std::fs::write(&soffice, "#!/bin/sh\nexit 1\n").unwrap();
        std::fs::set_permissions(&soffice, std::fs::Permissions::from_mode(0o755)).unwrap();

        let locator = RecordingLocator { tools: HashMap::from([("soffice", soffice)]), ..Default::default() };

        let outcome = run(&create_config(true), &RecordingBuilder::default(), &locator).unwrap();

        match &outcome {
            Outcome::Exported { export: PdfExport::BestEffort { out_dir, .. }, .. } => {
                assert_eq!(out_dir, &PathBuf::from("/work/out"));
            }
            other => panic!("expected best-effort export, got {:?}", other),
        }
        assert_eq!(outcome.exit_code(), 0);
    }
}
