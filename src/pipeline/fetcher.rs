//! HTTP fetcher implementation
//!
//! One GET per run. There is no retry, no backoff, and no redirect policy
//! beyond the reqwest default; any failure aborts the run.

use crate::config::SourceConfig;
use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;

/// Raw page returned by the fetch step
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Final URL after redirects
    pub final_url: String,
    /// Response body as text
    pub body: String,
}

/// User-Agent sent when the configuration does not name one
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Builds the HTTP client used for the fetch
///
/// No timeout is set unless `timeout-secs` is configured.
///
/// # Example
///
/// ```no_run
/// use table_harvest::config::SourceConfig;
/// use table_harvest::pipeline::build_http_client;
///
/// let client = build_http_client(&SourceConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &SourceConfig) -> Result<Client, reqwest::Error> {
    let user_agent = config
        .user_agent
        .clone()
        .unwrap_or_else(default_user_agent);

    let mut builder = Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a page and returns its body as text
///
/// # Errors
///
/// | Condition | Error |
/// |-----------|-------|
/// | DNS failure, connection refused, timeout | `HarvestError::Network` |
/// | Non-2xx status | `HarvestError::HttpStatus` |
/// | Body could not be read or decoded | `HarvestError::Network` |
pub async fn fetch_page(client: &Client, url: &str) -> Result<RawDocument, HarvestError> {
    tracing::info!("Fetching {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| HarvestError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();
    if final_url != url {
        tracing::debug!("Redirected to {}", final_url);
    }

    let body = response
        .text()
        .await
        .map_err(|source| HarvestError::Network {
            url: url.to_string(),
            source,
        })?;

    tracing::info!("Fetched {} bytes (status {})", body.len(), status.as_u16());
    Ok(RawDocument { final_url, body })
}
