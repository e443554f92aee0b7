//! Sequential visit loop.

use log::debug;

use crate::error_handling::FailureStats;
use crate::visit::{visit_site, SiteRecord, VisitedSite};

/// Successes and failures accumulated over one pass of the site list.
#[derive(Debug, Default)]
pub struct VisitTally {
    /// Successful visits, in visiting order
    pub visited: Vec<VisitedSite>,
    /// Failures counted per category
    pub failures: FailureStats,
}

impl VisitTally {
    /// Files one record into the matching accumulator.
    pub fn record(&mut self, record: SiteRecord) {
        match record {
            SiteRecord::Visited(visited) => self.visited.push(visited),
            SiteRecord::Failed(failed) => self.failures.increment_error(failed.error_type()),
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.total_errors()
    }
}

/// Visits every site in order, one request at a time.
pub async fn visit_all(client: &reqwest::Client, sites: &[String], verbose: bool) -> VisitTally {
    let mut tally = VisitTally::default();
    for (index, site) in sites.iter().enumerate() {
        debug!("Visiting site {}/{}: {}", index + 1, sites.len(), site);
        let record = visit_site(client, site, verbose).await;
        tally.record(record);
    }
    tally
}
