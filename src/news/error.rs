//! Error types for the news search client.

use thiserror::Error;

/// Errors that can occur while fetching articles.
#[derive(Debug, Error)]
pub enum NewsError {
    /// The configured base URL cannot be turned into a search endpoint.
    #[error("Invalid news endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network-level failure (DNS, refused connection, TLS, transport timeout).
    ///
    /// The URL is stripped from the source error because it carries the API key.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-2xx status.
    #[error("News API error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// The body could not be decoded as a search response.
    #[error("Failed to decode news response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// The body decoded but has no `articles` field.
    #[error("News response did not contain an articles list")]
    MalformedResponse,
}

impl NewsError {
    pub(crate) fn connection(source: reqwest::Error) -> Self {
        NewsError::Connection {
            source: source.without_url(),
        }
    }

    pub(crate) fn decode(source: reqwest::Error) -> Self {
        NewsError::Decode {
            source: source.without_url(),
        }
    }

    /// Short category string for logging.
    pub fn error_type(&self) -> &'static str {
        match self {
            NewsError::InvalidEndpoint { .. } => "invalid_endpoint",
            NewsError::Client(_) => "client_error",
            NewsError::Connection { .. } => "connection_error",
            NewsError::Upstream { .. } => "upstream_error",
            NewsError::Decode { .. } => "decode_error",
            NewsError::MalformedResponse => "malformed_response",
        }
    }
}
