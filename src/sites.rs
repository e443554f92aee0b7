//! Site list loading.
//!
//! A site list is any text where domains are separated by whitespace. There is
//! no comment syntax, no deduplication and no validation of the domains.

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use tokio::io::{AsyncReadExt, BufReader};

use crate::config::STDIN_PATH;

/// Splits `contents` on whitespace and returns the tokens in order.
pub fn parse_site_list(contents: &str) -> Vec<String> {
    contents.split_whitespace().map(str::to_string).collect()
}

/// Reads the site list at `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be opened or read. The run does not
/// recover from this.
pub async fn load_site_list(path: &Path) -> Result<Vec<String>> {
    let contents = if path.as_os_str() == STDIN_PATH {
        debug!("Reading site list from stdin");
        let mut buf = String::new();
        BufReader::new(tokio::io::stdin())
            .read_to_string(&mut buf)
            .await
            .context("Failed to read site list from stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to open site list {}", path.display()))?
    };

    let sites = parse_site_list(&contents);
    debug!("Parsed {} sites from {}", sites.len(), path.display());
    Ok(sites)
}
