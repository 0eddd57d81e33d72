/// Core data structures for report generation
///
/// This module defines the request handed to the report builder and the
/// configuration profile it should apply.
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Built-in report configuration profiles shipped with the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinProfile {
    Standard,
    StandardOnFail,
    NoTrace,
    Compact,
}

impl BuiltinProfile {
    pub const ALL: [BuiltinProfile; 4] =
        [BuiltinProfile::Standard, BuiltinProfile::StandardOnFail, BuiltinProfile::NoTrace, BuiltinProfile::Compact];

    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinProfile::Standard => "standard",
            BuiltinProfile::StandardOnFail => "standard_on_fail",
            BuiltinProfile::NoTrace => "no_trace",
            BuiltinProfile::Compact => "compact",
        }
    }

    /// Look up a profile by its exact command-line name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

/// Which configuration the builder should apply to the report
///
/// Anything that is not a built-in profile name is a path to a custom
/// `.ini` configuration file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ConfigProfile {
    Named(BuiltinProfile),
    File(PathBuf),
}

impl Default for ConfigProfile {
    fn default() -> Self {
        ConfigProfile::Named(BuiltinProfile::Standard)
    }
}

impl fmt::Display for ConfigProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigProfile::Named(profile) => write!(f, "{}", profile.as_str()),
            ConfigProfile::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fully resolved input for one report build
///
/// All paths are absolute. Built once by `config::build_run_config` and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRequest {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub template_path: PathBuf,
    pub config_profile: ConfigProfile,
    pub title: Option<String>,
    pub logo_path: Option<PathBuf>,
    pub logo_height_cm: Option<f64>,
}

/// Everything the pipeline needs for a single invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub request: ReportRequest,
    /// Try to derive a PDF from the generated document
    pub export_pdf: bool,
    /// Executable that builds the document from the request
    pub builder_program: PathBuf,
}
