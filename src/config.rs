/// Configuration resolution module
///
/// This module handles:
/// - Building a RunConfig from CLI arguments
/// - Resolving every user path against the invocation directory
/// - Falling back to the bundled template
/// - Deciding between built-in profiles and custom config files
use crate::cli::CliArgs;
use crate::paths::{self, ResourceRoot};
use crate::types::*;
use log::{debug, warn};
use std::path::Path;

/// Build a complete RunConfig from CLI arguments
///
/// All paths are resolved upfront so the pipeline receives an immutable,
/// fully absolute request.
pub fn build_run_config(args: &CliArgs, cwd: &Path, resources: &ResourceRoot) -> RunConfig {
    debug!("Building run config from CLI args in {:?}", cwd);

    let template_path = match args.template {
        Some(ref template) => paths::resolve_path(cwd, template),
        None => {
            if !resources.has_default_template() {
                warn!(
                    "Default template not found under {:?}; place {} there or pass --resource-dir",
                    resources.dir(),
                    paths::DEFAULT_TEMPLATE_NAME
                );
            }
            resources.default_template()
        }
    };

    let request = ReportRequest {
        input_dir: paths::resolve_path(cwd, &args.alluredir),
        output_path: paths::resolve_path(cwd, &args.output),
        template_path,
        config_profile: resolve_config_profile(&args.config, cwd),
        title: args.title.clone(),
        logo_path: args.logo.as_deref().map(|logo| paths::resolve_path(cwd, logo)),
        logo_height_cm: args.logo_height,
    };

    debug!("Resolved report request: {:?}", request);
    debug!("Using config profile {}", request.config_profile);

    RunConfig { request, export_pdf: args.pdf, builder_program: args.builder.clone() }
}

/// Interpret the `--config` value
///
/// Exact built-in names select that profile; anything else is a path to a
/// custom `.ini` file.
pub fn resolve_config_profile(value: &str, cwd: &Path) -> ConfigProfile {
    match BuiltinProfile::from_name(value) {
        Some(profile) => ConfigProfile::Named(profile),
        None => ConfigProfile::File(paths::resolve_path(cwd, Path::new(value))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
