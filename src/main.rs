// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod builder;
mod cli;
mod config;
mod error;
mod paths;
mod pdf;
mod pipeline;
mod types;
mod ui;

use builder::CommandBuilder;
use log::debug;
use pdf::PdfExport;
use pipeline::Outcome;
use std::env;

/// Exit code when the invocation directory cannot be determined
const EXIT_NO_CWD: i32 = 2;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse CLI arguments (malformed options exit here with clap's usage status)
    let args = cli::CliArgs::parse_args();

    let cwd = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            ui::print_error(&format!("Cannot determine the current directory: {}", e));
            std::process::exit(EXIT_NO_CWD);
        }
    };

    // Resource root is decided once and only read afterwards
    let resources = paths::ResourceRoot::detect(args.resource_dir.as_deref(), &cwd);
    debug!("Resources in {:?} ({:?} layout)", resources.dir(), resources.layout());
    let config = config::build_run_config(&args, &cwd, &resources);

    let builder = CommandBuilder::new(config.builder_program.clone());
    debug!("Using report builder {:?}", builder.program());
    let locator = pdf::PathLocator::from_env();

    let exit_code = match pipeline::run(&config, &builder, &locator) {
        Ok(outcome) => {
            report_outcome(&outcome);
            outcome.exit_code()
        }
        Err(e) => {
            ui::print_error(&e.to_string());
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}

/// Print what the run produced
fn report_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Document { path } => {
            debug!("Report saved to {}", path.display());
        }
        Outcome::Exported { export: PdfExport::Converted { tool, pdf_path, result }, .. } => {
            println!("{}", result.captured_output);
            debug!("{} wrote {} with exit code {}", tool, pdf_path.display(), result.exit_code);
        }
        Outcome::Exported { document, export: PdfExport::BestEffort { tool, out_dir, .. } } => {
            ui::status(&format!(
                "{} asked to convert {} into {} (best effort, result not verified)",
                tool,
                document.display(),
                out_dir.display()
            ));
        }
    }
}
