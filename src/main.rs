//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `top_site_perf` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the report and choosing the exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use top_site_perf::initialization::init_logger_with;
use top_site_perf::{evaluate_exit_code, run_scan, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let fail_on = config.fail_on;
    match run_scan(config).await {
        Ok(scan) => {
            print!("{}", scan.output());
            let code = evaluate_exit_code(fail_on, &scan);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("top_site_perf error: {:#}", e);
            process::exit(1);
        }
    }
}
