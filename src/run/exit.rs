//! Exit code policy.

use crate::config::FailOn;

use super::ScanReport;

/// Maps a finished run to a process exit code under `fail_on`.
///
/// Returns 0 unless the policy is triggered, in which case it returns 2. An
/// early exit for too few successful visits is not an error by default.
pub fn evaluate_exit_code(fail_on: FailOn, scan: &ScanReport) -> i32 {
    let triggered = match fail_on {
        FailOn::Never => false,
        FailOn::Insufficient => scan.report.is_err(),
        FailOn::AnyFailure => scan.failed > 0,
    };
    if triggered {
        2
    } else {
        0
    }
}
