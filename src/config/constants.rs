//! Configuration constants.
//!
//! Fixed values that shape the report and the outbound requests.

/// Scheme prefixed to every domain in the site list.
///
/// Domains are always requested over plain HTTP, never HTTPS.
pub const URL_SCHEME: &str = "http://";

/// Minimum number of successful visits needed to print a report.
///
/// Below this floor the run stops without printing a report.
pub const MIN_SUCCESSFUL_SITES: usize = 5;

/// Number of sites listed in each of the fastest and slowest sections.
pub const REPORT_TOP_N: usize = 5;

/// Divisor used to turn a body length in bytes into kilobytes (decimal kb).
pub const BYTES_PER_KB: usize = 1000;

/// Path value that makes the loader read the site list from stdin.
pub const STDIN_PATH: &str = "-";
