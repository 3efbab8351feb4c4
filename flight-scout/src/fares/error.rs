//! Fare source error types.

/// Errors from fetching a fare.
///
/// The search enumerator treats every variant as "no price" for the triple;
/// the distinction only matters for logging.
#[derive(Debug, thiserror::Error)]
pub enum FareError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Site refused the request
    #[error("unauthorized (request rejected by fare site)")]
    Unauthorized,

    /// Rate limited by the site
    #[error("rate limited by fare site")]
    RateLimited,

    /// Site returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Mock data could not be loaded
    #[error("mock fare data: {0}")]
    Mock(String),
}
