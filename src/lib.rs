//! top_site_perf library: homepage size and download time across a list of domains
//!
//! The library reads a whitespace-separated list of domains, visits each one
//! over plain HTTP in sequence, and reports the five fastest and five slowest
//! homepages along with the median size and download time.
//!
//! # Example
//!
//! ```no_run
//! use top_site_perf::{run_scan, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("sites.txt"),
//!     verbose: true,
//!     ..Default::default()
//! };
//!
//! let scan = run_scan(config).await?;
//! println!("{} of {} sites loaded", scan.successful, scan.total_sites);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Sites are still visited one at a
//! time; the runtime only drives the HTTP client.

mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod report;
mod run;
pub mod sites;
pub mod visit;

// Re-export public API
pub use config::{Cli, Config, ConfigValidationError, FailOn, LogFormat, LogLevel};
pub use error_handling::{ErrorType, ReportError};
pub use report::{build_report, SiteReport, SiteSummary};
pub use run::{evaluate_exit_code, run_scan, visit_all, ScanReport, VisitTally};
pub use sites::{load_site_list, parse_site_list};
pub use visit::{visit_site, FailedSite, SiteRecord, VisitedSite};
