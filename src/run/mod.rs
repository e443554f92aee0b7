//! Run orchestration: load the site list, visit every site, build the report.

mod exit;
mod task;

use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::app::{loaded_sites_line, print_failure_statistics, print_visit_summary};
use crate::config::Config;
use crate::error_handling::ReportError;
use crate::initialization::init_client;
use crate::report::{build_report, SiteReport};
use crate::sites::load_site_list;

pub use exit::evaluate_exit_code;
pub use task::{visit_all, VisitTally};

/// Results of a measurement run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Number of sites read from the site list
    pub total_sites: usize,
    /// Number of sites visited successfully
    pub successful: usize,
    /// Number of sites that failed to load
    pub failed: usize,
    /// Wall-clock duration of the whole run in seconds
    pub elapsed_seconds: f64,
    /// The report, or why it could not be produced
    pub report: Result<SiteReport, ReportError>,
}

impl ScanReport {
    /// Text written to stdout once the run is over: the full report, or the
    /// insufficient-sites message on its own line.
    pub fn output(&self) -> String {
        match &self.report {
            Ok(report) => report.to_string(),
            Err(e) => format!("{e}\n"),
        }
    }
}

/// Runs a measurement with the provided configuration.
///
/// Reads the site list, visits each site sequentially and aggregates the
/// successful visits. Too few successes is not an error here: it is returned
/// in [`ScanReport::report`] for the caller to print.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the site list cannot be
/// read, or the HTTP client cannot be built.
///
/// # Example
///
/// ```no_run
/// use top_site_perf::{run_scan, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     file: PathBuf::from("sites.txt"),
///     ..Default::default()
/// };
/// let scan = run_scan(config).await?;
/// print!("{}", scan.output());
/// # Ok(())
/// # }
/// ```
pub async fn run_scan(config: Config) -> Result<ScanReport> {
    let start_time = Instant::now();
    config.validate().context("Invalid configuration")?;

    let sites = load_site_list(&config.file).await?;
    if config.verbose {
        println!("{}", loaded_sites_line(sites.len()));
    }
    info!("Loaded {} sites from {}", sites.len(), config.file.display());

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    if config.timeout_seconds.is_none() {
        log::debug!("No request timeout configured; an unresponsive site blocks the run");
    }

    let tally = visit_all(&client, &sites, config.verbose).await;
    let failed = tally.failed();

    if config.verbose {
        print_visit_summary(tally.visited.len(), failed);
    }
    print_failure_statistics(&tally.failures);

    let report = build_report(&tally.visited, failed);
    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    info!(
        "Processed {} site{} ({} succeeded, {} failed) in {:.1}s",
        sites.len(),
        if sites.len() == 1 { "" } else { "s" },
        tally.visited.len(),
        failed,
        elapsed_seconds
    );

    Ok(ScanReport {
        total_sites: sites.len(),
        successful: tally.visited.len(),
        failed,
        elapsed_seconds,
        report,
    })
}
