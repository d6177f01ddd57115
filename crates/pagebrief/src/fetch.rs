//! Outbound document fetching
//!
//! One GET per brief, no retries. Timeouts are deliberate configuration:
//! a slow upstream is a fetch error, never a hung request.

use crate::error::BriefError;
use crate::types::FetchedDocument;
use crate::DEFAULT_USER_AGENT;
use std::time::Duration;
use url::Url;

/// Connect timeout for the outbound GET
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Total request timeout, body included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch configuration
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Total request timeout
    pub request_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: None,
            connect_timeout: CONNECT_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Issue a single GET and return the raw document.
///
/// Transport failures, timeouts, and non-2xx statuses all surface as
/// [`BriefError`]; a non-success upstream never reaches extraction.
pub async fn fetch_document(
    url: &str,
    options: &FetchOptions,
) -> Result<FetchedDocument, BriefError> {
    if url.is_empty() {
        return Err(BriefError::MissingUrl);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(BriefError::InvalidUrlScheme);
    }
    Url::parse(url).map_err(|_| BriefError::InvalidUrlScheme)?;

    let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    let client = reqwest::Client::builder()
        .user_agent(user_agent)
        .connect_timeout(options.connect_timeout)
        .timeout(options.request_timeout)
        .build()
        .map_err(BriefError::ClientBuild)?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(BriefError::from_reqwest)?;

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return Err(BriefError::HttpStatus {
            status: status.as_u16(),
            url: final_url,
        });
    }

    let bytes = response.bytes().await.map_err(BriefError::from_reqwest)?;

    Ok(FetchedDocument {
        bytes,
        status: status.as_u16(),
        final_url,
    })
}
