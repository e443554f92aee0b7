//! Error handling and failure statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, report, per-visit categories)
//! - Categorization of HTTP client errors
//! - Failure statistics tracking
//!
//! A failed visit never escalates past the visitor: it is classified into an
//! [`ErrorType`], counted, and the run moves on to the next site.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::FailureStats;
pub use types::{ErrorType, InitializationError, ReportError};
