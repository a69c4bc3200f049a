//! ansible-doc-template-extractor CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Spec file error
//! - 4: Template error
//! - 5: Output file error

use std::process::ExitCode;

use adte_core::{ExtractError, ExtractEvent, Extractor};
use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::Cli;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const SPEC_ERROR: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
    pub const OUTPUT_ERROR: u8 = 5;
}

const WORKSPACE_CRATES: [&str; 4] = ["adte_cli", "adte_core", "adte_spec", "adte_templates"];

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&cli);

    if cli.help_template {
        print!("{}", cli::template_help());
        return ExitCode::from(ExitCodes::SUCCESS);
    }

    match run(&cli) {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else if cli.quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::WARN
    };

    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    for name in WORKSPACE_CRATES {
        if let Ok(directive) = format!("{}={}", name, level).parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    // Fails only when a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let quiet = cli.quiet;
    let mut report = |event: ExtractEvent<'_>| {
        if !quiet {
            println!("{}", event);
        }
    };

    let extractor = Extractor::new_with(cli.to_options(), &mut report)?;
    let files = extractor.run_with(&mut report)?;
    debug!("Documented {} spec file(s)", files.len());

    Ok(())
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    let extract_error = e
        .chain()
        .find_map(|cause| cause.downcast_ref::<ExtractError>());

    match extract_error {
        Some(ExtractError::InvalidOptions(_)) => ExitCodes::INVALID_ARGS,
        Some(ExtractError::NoName(_)) | Some(ExtractError::Spec(_)) => ExitCodes::SPEC_ERROR,
        Some(ExtractError::Template(_)) => ExitCodes::TEMPLATE_ERROR,
        Some(ExtractError::Write { .. }) => ExitCodes::OUTPUT_ERROR,
        None => ExitCodes::GENERAL_ERROR,
    }
}
