//! Per-site visit records.

use crate::config::{BYTES_PER_KB, URL_SCHEME};
use crate::error_handling::ErrorType;

/// Builds the request URL for a bare domain.
pub fn site_url(site: &str) -> String {
    format!("{URL_SCHEME}{site}")
}

/// A site whose homepage was fetched successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitedSite {
    site: String,
    url: String,
    html: String,
    size_kb: u64,
    elapsed_seconds: f64,
}

impl VisitedSite {
    /// Creates a measurement for `site` from its body text and request duration.
    ///
    /// The size is the body length in bytes divided by 1000, truncated.
    pub fn new(site: impl Into<String>, html: String, elapsed_seconds: f64) -> Self {
        let site = site.into();
        let url = site_url(&site);
        let size_kb = (html.len() / BYTES_PER_KB) as u64;
        Self {
            site,
            url,
            html,
            size_kb,
            elapsed_seconds,
        }
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn size_kb(&self) -> u64 {
        self.size_kb
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }
}

/// A site that could not be fetched.
///
/// Carries no body, size or timing; only why the visit failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedSite {
    site: String,
    url: String,
    error_type: ErrorType,
    message: String,
}

impl FailedSite {
    pub fn new(site: impl Into<String>, error_type: ErrorType, message: impl Into<String>) -> Self {
        let site = site.into();
        let url = site_url(&site);
        Self {
            site,
            url,
            error_type,
            message: message.into(),
        }
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of visiting one domain.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteRecord {
    Visited(VisitedSite),
    Failed(FailedSite),
}

impl SiteRecord {
    /// Whether the visit produced a measurement.
    pub fn ok(&self) -> bool {
        matches!(self, SiteRecord::Visited(_))
    }

    pub fn site(&self) -> &str {
        match self {
            SiteRecord::Visited(v) => v.site(),
            SiteRecord::Failed(f) => f.site(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            SiteRecord::Visited(v) => v.url(),
            SiteRecord::Failed(f) => f.url(),
        }
    }

    pub fn html(&self) -> Option<&str> {
        match self {
            SiteRecord::Visited(v) => Some(v.html()),
            SiteRecord::Failed(_) => None,
        }
    }

    pub fn size_kb(&self) -> Option<u64> {
        match self {
            SiteRecord::Visited(v) => Some(v.size_kb()),
            SiteRecord::Failed(_) => None,
        }
    }

    pub fn elapsed_seconds(&self) -> Option<f64> {
        match self {
            SiteRecord::Visited(v) => Some(v.elapsed_seconds()),
            SiteRecord::Failed(_) => None,
        }
    }
}
