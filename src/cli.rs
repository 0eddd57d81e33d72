use clap::Parser;
use std::path::PathBuf;

/// Builder executable used when neither `--builder` nor `ALLURE_DOCX_BUILDER` is set
pub const DEFAULT_BUILDER: &str = "allure-docx-builder";

#[derive(Parser, Debug, Clone)]
#[command(name = "allure-docx")]
#[command(about = "Generate a docx report from allure test results, optionally converting it to PDF")]
#[command(version)]
pub struct CliArgs {
    /// Path (relative or absolute) to the allure results directory
    #[arg(value_name = "ALLUREDIR")]
    pub alluredir: PathBuf,

    /// Path (relative or absolute) with filename for the generated docx file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Path (absolute or relative) to a custom docx template file with styles
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Report configuration: standard, standard_on_fail, no_trace, compact,
    /// or a path to a custom .ini configuration file
    #[arg(long, value_name = "PROFILE|PATH", default_value = "standard")]
    pub config: String,

    /// Try to generate a PDF from the created docx using OfficeToPDF (needs MS Word) or soffice
    #[arg(long)]
    pub pdf: bool,

    /// Custom report title
    #[arg(long)]
    pub title: Option<String>,

    /// Path to a custom report logo image
    #[arg(long, value_name = "PATH")]
    pub logo: Option<PathBuf>,

    /// Logo height in centimeters; width is scaled to keep the aspect ratio
    #[arg(long, value_name = "CM", value_parser = parse_logo_height)]
    pub logo_height: Option<f64>,

    /// Directory containing bundled resources such as the default template
    #[arg(long, value_name = "DIR", env = "ALLURE_DOCX_RESOURCES")]
    pub resource_dir: Option<PathBuf>,

    /// Executable that renders the docx document from the resolved request
    #[arg(long, value_name = "PROGRAM", env = "ALLURE_DOCX_BUILDER", default_value = DEFAULT_BUILDER)]
    pub builder: PathBuf,
}

impl CliArgs {
    /// Parse command-line arguments
    ///
    /// Malformed values (such as a non-numeric `--logo-height`) are reported
    /// by clap and terminate with its usage status before any work starts.
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}

/// Parse a logo height in centimeters.
///
/// Accepts plain decimal numbers only; the value must be finite and positive.
pub fn parse_logo_height(value: &str) -> Result<f64, String> {
    let height: f64 =
        value.trim().parse().map_err(|_| format!("'{}' is not a decimal number of centimeters", value))?;

    if !height.is_finite() || height <= 0.0 {
        return Err(format!("logo height must be a positive number of centimeters, got '{}'", value));
    }

    Ok(height)
}
