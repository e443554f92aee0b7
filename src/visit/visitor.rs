//! Single-site HTTP visit.

use std::time::{Duration, Instant};

use log::debug;

use crate::app::{failed_site_line, visited_site_line};
use crate::error_handling::categorize_reqwest_error;

use super::record::{site_url, FailedSite, SiteRecord, VisitedSite};

/// Visits `http://<site>` once and records the outcome.
///
/// Exactly one GET is sent, with no retries and no extra headers. Any transport
/// failure, or a 4xx/5xx status, produces [`SiteRecord::Failed`]; the error
/// never reaches the caller. The call blocks until the request finishes or the
/// client gives up, which without a configured timeout may be never.
///
/// When `verbose` is set a one-line progress message is printed to stdout.
pub async fn visit_site(client: &reqwest::Client, site: &str, verbose: bool) -> SiteRecord {
    let url = site_url(site);

    match fetch_homepage(client, &url).await {
        Ok((html, elapsed)) => {
            let visited = VisitedSite::new(site, html, elapsed.as_secs_f64());
            debug!(
                "Fetched {} ({} bytes in {:?})",
                url,
                visited.html().len(),
                elapsed
            );
            if verbose {
                println!(
                    "{}",
                    visited_site_line(site, visited.size_kb(), visited.elapsed_seconds())
                );
            }
            SiteRecord::Visited(visited)
        }
        Err(e) => {
            let error_type = categorize_reqwest_error(&e);
            debug!("Failed to load {url}: {error_type}: {e}");
            if verbose {
                println!("{}", failed_site_line(site));
            }
            SiteRecord::Failed(FailedSite::new(site, error_type, e.to_string()))
        }
    }
}

/// Sends the GET and reads the body as text.
///
/// The elapsed time covers sending the request up to receiving the response
/// head; reading the body is not included.
async fn fetch_homepage(
    client: &reqwest::Client,
    url: &str,
) -> Result<(String, Duration), reqwest::Error> {
    let start = Instant::now();
    let response = client.get(url).send().await?;
    let elapsed = start.elapsed();
    let html = response.error_for_status()?.text().await?;
    Ok((html, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorType;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    #[tokio::test]
    async fn test_visit_site_success() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .respond_with(status_code(200).body("x".repeat(2500))),
        );

        let site = server.addr().to_string();
        let client = reqwest::Client::new();
        let record = visit_site(&client, &site, true).await;

        assert!(record.ok());
        assert_eq!(record.site(), site);
        assert_eq!(record.url(), format!("http://{site}"));
        assert_eq!(record.size_kb(), Some(2));
        assert!(record.elapsed_seconds().is_some_and(|t| t >= 0.0));
    }

    #[tokio::test]
    async fn test_visit_site_size_matches_body_length() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .respond_with(status_code(200).body("<html>".repeat(700))),
        );

        let client = reqwest::Client::new();
        let record = visit_site(&client, &server.addr().to_string(), false).await;

        let html_len = record.html().map(str::len).expect("visit should succeed");
        assert_eq!(html_len, 4200);
        assert_eq!(record.size_kb(), Some((html_len / 1000) as u64));
    }

    #[tokio::test]
    async fn test_visit_site_not_found_is_failure() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .respond_with(status_code(404).body("gone")),
        );

        let client = reqwest::Client::new();
        let record = visit_site(&client, &server.addr().to_string(), true).await;

        assert!(!record.ok());
        assert_eq!(record.html(), None);
        assert_eq!(record.size_kb(), None);
        assert_eq!(record.elapsed_seconds(), None);
        match record {
            SiteRecord::Failed(failed) => {
                assert_eq!(failed.error_type(), ErrorType::HttpRequestNotFound)
            }
            SiteRecord::Visited(_) => panic!("404 should be a failed visit"),
        }
    }

    #[tokio::test]
    async fn test_visit_site_connection_refused() {
        // Bind and drop a listener to get a local port nothing is listening on
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .expect("Failed to reserve a local port");

        let client = reqwest::Client::new();
        let record = visit_site(&client, &addr.to_string(), true).await;

        assert!(!record.ok());
        assert_eq!(record.html(), None);
        assert_eq!(record.size_kb(), None);
        assert_eq!(record.elapsed_seconds(), None);
        match record {
            SiteRecord::Failed(failed) => {
                assert_eq!(failed.error_type(), ErrorType::HttpRequestConnectError);
                assert!(!failed.message().is_empty());
            }
            SiteRecord::Visited(_) => panic!("refused connection should be a failed visit"),
        }
    }

    #[tokio::test]
    async fn test_visit_site_twice_is_stable() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .times(2)
                .respond_with(status_code(200).body("y".repeat(12_345))),
        );

        let client = reqwest::Client::new();
        let site = server.addr().to_string();
        let first = visit_site(&client, &site, false).await;
        let second = visit_site(&client, &site, false).await;

        assert_eq!(first.ok(), second.ok());
        assert_eq!(first.size_kb(), Some(12));
        assert_eq!(first.size_kb(), second.size_kb());
    }

    #[tokio::test]
    async fn test_visit_site_times_out_when_configured() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/")).respond_with(
                delay_and_then(Duration::from_secs(2), status_code(200).body("late")),
            ),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .expect("Failed to create HTTP client");
        let record = visit_site(&client, &server.addr().to_string(), false).await;

        match record {
            SiteRecord::Failed(failed) => {
                assert_eq!(failed.error_type(), ErrorType::HttpRequestTimeoutError)
            }
            SiteRecord::Visited(_) => panic!("slow response should time out"),
        }
    }
}
