//! Error types for PageBrief

use thiserror::Error;

/// Errors that can occur while producing a brief
#[derive(Debug, Error)]
pub enum BriefError {
    /// URL is missing
    #[error("Missing required parameter: url")]
    MissingUrl,

    /// URL has invalid scheme
    #[error("Invalid URL: must start with http:// or https://")]
    InvalidUrlScheme,

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Request exceeded the connect or total timeout
    #[error("Request timed out: server did not respond in time")]
    Timeout,

    /// Failed to connect to server
    #[error("Failed to connect to server")]
    Connect(#[source] reqwest::Error),

    /// Other transport error
    #[error("Request failed: {0}")]
    Request(String),

    /// Upstream responded with a non-success status
    #[error("HTTP error status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// A format-specific extractor could not decode its input
    #[error("Failed to parse document: {0}")]
    Parse(String),
}

impl BriefError {
    /// Classify a reqwest error into the transport taxonomy
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BriefError::Timeout
        } else if err.is_connect() {
            BriefError::Connect(err)
        } else {
            BriefError::Request(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BriefError::MissingUrl.to_string(),
            "Missing required parameter: url"
        );
        assert_eq!(
            BriefError::InvalidUrlScheme.to_string(),
            "Invalid URL: must start with http:// or https://"
        );
        assert_eq!(
            BriefError::HttpStatus {
                status: 404,
                url: "https://example.com/missing".to_string()
            }
            .to_string(),
            "HTTP error status 404 from https://example.com/missing"
        );
        assert_eq!(
            BriefError::Parse("bad pdf".to_string()).to_string(),
            "Failed to parse document: bad pdf"
        );
    }
}
