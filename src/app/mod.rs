//! Main application modules.
//!
//! This module provides the statistics and summary output used by the run.

pub mod statistics;

// Re-export public API
pub use statistics::{
    failed_site_line, loaded_sites_line, print_failure_statistics, print_visit_summary,
    visit_summary_lines, visited_site_line,
};
