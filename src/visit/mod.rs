//! Site visiting.
//!
//! One HTTP GET per domain, turned into a [`SiteRecord`] that is either a
//! measurement or a classified failure.

mod record;
mod visitor;

pub use record::{site_url, FailedSite, SiteRecord, VisitedSite};
pub use visitor::visit_site;
