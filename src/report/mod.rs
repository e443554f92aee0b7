//! Report aggregation and rendering.
//!
//! Takes the successful visits of a run, sorts them by download time and by
//! size, and renders the fastest/slowest listings and the medians.

mod aggregate;
mod render;
mod sorted;

pub use aggregate::{build_report, SiteReport, SiteSummary};
pub use render::format_seconds;
pub use sorted::{ByElapsed, BySize, ByValue, SortKey, SortedBy};
