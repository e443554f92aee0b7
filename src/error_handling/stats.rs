//! Failure statistics tracking.
//!
//! Counts failed visits per [`ErrorType`] so the run can log a breakdown once
//! every site has been visited.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Per-category failure counters for a single run.
///
/// Only the orchestration loop touches this, one visit at a time, so plain
/// counters behind `&mut self` are enough.
#[derive(Debug)]
pub struct FailureStats {
    errors: HashMap<ErrorType, usize>,
}

impl FailureStats {
    pub fn new() -> Self {
        let errors = ErrorType::iter().map(|error| (error, 0)).collect();
        FailureStats { errors }
    }

    /// Increment an error counter.
    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    /// Total number of failures recorded across all categories.
    pub fn total_errors(&self) -> usize {
        self.errors.values().sum()
    }
}

impl Default for FailureStats {
    fn default() -> Self {
        Self::new()
    }
}
