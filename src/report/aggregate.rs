//! Report aggregation over successful visits.

use crate::config::{MIN_SUCCESSFUL_SITES, REPORT_TOP_N};
use crate::error_handling::ReportError;
use crate::visit::VisitedSite;

use super::sorted::{ByElapsed, BySize, SortedBy};

/// The fields of a visit that appear in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSummary {
    pub site: String,
    pub size_kb: u64,
    pub elapsed_seconds: f64,
}

impl SiteSummary {
    pub fn new(site: impl Into<String>, size_kb: u64, elapsed_seconds: f64) -> Self {
        Self {
            site: site.into(),
            size_kb,
            elapsed_seconds,
        }
    }
}

impl From<&VisitedSite> for SiteSummary {
    fn from(visited: &VisitedSite) -> Self {
        Self::new(visited.site(), visited.size_kb(), visited.elapsed_seconds())
    }
}

/// Fastest/slowest listings and medians for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteReport {
    /// First entries of the time-sorted view, fastest first
    pub fastest: Vec<SiteSummary>,
    /// Last entries of the time-sorted view, in ascending order (slowest last)
    pub slowest: Vec<SiteSummary>,
    /// Median homepage size in kb, truncated to an integer
    pub median_size_kb: u64,
    /// Median homepage download time in seconds
    pub median_elapsed_seconds: f64,
    /// Number of successful visits the report covers
    pub visited: usize,
    /// Number of failed visits
    pub failed: usize,
}

/// Builds the report from the successful visits of a run.
///
/// `failed` is only carried through for the summary; failures never enter the
/// sorted views.
///
/// # Errors
///
/// Returns [`ReportError::InsufficientSites`] when fewer than
/// [`MIN_SUCCESSFUL_SITES`] visits succeeded.
pub fn build_report(visited: &[VisitedSite], failed: usize) -> Result<SiteReport, ReportError> {
    if visited.len() < MIN_SUCCESSFUL_SITES {
        return Err(ReportError::InsufficientSites {
            visited: visited.len(),
            required: MIN_SUCCESSFUL_SITES,
        });
    }

    let summaries: Vec<SiteSummary> = visited.iter().map(SiteSummary::from).collect();
    let time_sort = SortedBy::<_, ByElapsed>::new(summaries.clone());
    let size_sort = SortedBy::<_, BySize>::new(summaries);

    // Both views are non-empty past the floor check above
    let median_size = size_sort.median().unwrap_or_default();
    let median_time = time_sort.median().unwrap_or_default();

    Ok(SiteReport {
        fastest: time_sort.first(REPORT_TOP_N).to_vec(),
        slowest: time_sort.last(REPORT_TOP_N).to_vec(),
        median_size_kb: median_size as u64,
        median_elapsed_seconds: median_time,
        visited: visited.len(),
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visited(site: &str, size_kb: usize, elapsed_seconds: f64) -> VisitedSite {
        VisitedSite::new(site, "x".repeat(size_kb * 1000), elapsed_seconds)
    }

    fn five_sites() -> Vec<VisitedSite> {
        vec![
            visited("a.com", 1, 0.1),
            visited("b.com", 2, 0.2),
            visited("c.com", 3, 0.3),
            visited("d.com", 4, 0.4),
            visited("e.com", 5, 0.5),
        ]
    }

    fn names(sites: &[SiteSummary]) -> Vec<&str> {
        sites.iter().map(|s| s.site.as_str()).collect()
    }

    #[test]
    fn test_four_successes_is_insufficient() {
        let mut sites = five_sites();
        sites.pop();
        let err = build_report(&sites, 6).expect_err("four sites should not report");
        assert_eq!(
            err,
            ReportError::InsufficientSites {
                visited: 4,
                required: 5
            }
        );
    }

    #[test]
    fn test_no_successes_is_insufficient() {
        assert!(build_report(&[], 10).is_err());
    }

    #[test]
    fn test_exactly_five_successes() {
        let report = build_report(&five_sites(), 2).expect("five sites should report");
        let all = vec!["a.com", "b.com", "c.com", "d.com", "e.com"];
        assert_eq!(names(&report.fastest), all);
        assert_eq!(names(&report.slowest), all);
        assert_eq!(report.median_size_kb, 3);
        assert_eq!(report.median_elapsed_seconds, 0.3);
        assert_eq!(report.visited, 5);
        assert_eq!(report.failed, 2);
    }

    #[test]
    fn test_slowest_listed_in_ascending_order() {
        let sites: Vec<VisitedSite> = (1..=7)
            .rev()
            .map(|i| visited(&format!("s{i}.com"), i, i as f64))
            .collect();
        let report = build_report(&sites, 0).expect("seven sites should report");
        assert_eq!(
            names(&report.fastest),
            vec!["s1.com", "s2.com", "s3.com", "s4.com", "s5.com"]
        );
        assert_eq!(
            names(&report.slowest),
            vec!["s3.com", "s4.com", "s5.com", "s6.com", "s7.com"]
        );
    }

    #[test]
    fn test_even_count_medians() {
        // Sizes and times deliberately not aligned with each other
        let sites = vec![
            visited("a.com", 10, 0.4),
            visited("b.com", 1, 0.1),
            visited("c.com", 4, 0.3),
            visited("d.com", 2, 0.8),
            visited("e.com", 7, 0.2),
            visited("f.com", 3, 0.6),
        ];
        let report = build_report(&sites, 0).expect("six sites should report");
        // sizes 1,2,3,4,7,10 -> (3 + 4) / 2 = 3.5 -> 3
        assert_eq!(report.median_size_kb, 3);
        // times .1,.2,.3,.4,.6,.8 -> (.4 + .3) / 2
        assert_eq!(report.median_elapsed_seconds, (0.4 + 0.3) / 2.0);
    }

    #[test]
    fn test_time_ties_keep_input_order() {
        let sites = vec![
            visited("first.com", 1, 0.2),
            visited("second.com", 1, 0.2),
            visited("third.com", 1, 0.2),
            visited("fourth.com", 1, 0.2),
            visited("fifth.com", 1, 0.2),
            visited("sixth.com", 1, 0.2),
        ];
        let report = build_report(&sites, 0).expect("six sites should report");
        assert_eq!(
            names(&report.fastest),
            vec!["first.com", "second.com", "third.com", "fourth.com", "fifth.com"]
        );
        assert_eq!(
            names(&report.slowest),
            vec!["second.com", "third.com", "fourth.com", "fifth.com", "sixth.com"]
        );
    }
}
