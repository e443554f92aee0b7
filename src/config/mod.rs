//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (scheme, report sizes, thresholds)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Config, ConfigValidationError, FailOn, LogFormat, LogLevel};
