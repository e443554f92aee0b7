//! Run statistics output.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, FailureStats};
use crate::report::format_seconds;

/// Logs the per-category breakdown of failed visits.
///
/// Nothing is logged when every visit succeeded.
pub fn print_failure_statistics(failure_stats: &FailureStats) {
    let total_errors = failure_stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Failure Counts ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = failure_stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}

/// Verbose progress line for a site that loaded.
pub fn visited_site_line(site: &str, size_kb: u64, elapsed_seconds: f64) -> String {
    format!(
        "[+] Visited {} {}kb {}s",
        site,
        size_kb,
        format_seconds(elapsed_seconds)
    )
}

/// Verbose progress line for a site that failed to load.
pub fn failed_site_line(site: &str) -> String {
    format!("[-] Failed to load {}", site)
}

/// Verbose line announcing how many sites were read from the list.
pub fn loaded_sites_line(count: usize) -> String {
    format!("[+] Loaded a list of {} sites", count)
}

/// Verbose run summary. The failure line is only present when something failed.
pub fn visit_summary_lines(visited: usize, failed: usize) -> Vec<String> {
    let mut lines = vec![format!("[+] Visited {} sites", visited)];
    if failed > 0 {
        lines.push(format!("[-] Failed to visit {} sites", failed));
    }
    lines
}

/// Prints the verbose run summary lines to stdout.
pub fn print_visit_summary(visited: usize, failed: usize) {
    for line in visit_summary_lines(visited, failed) {
        println!("{line}");
    }
}
