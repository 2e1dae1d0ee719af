//! Error types for probe construction

use thiserror::Error;

/// Result type alias for probe construction
pub type Result<T> = std::result::Result<T, ProbeBuildError>;

/// Errors that prevent a probe from being built
#[derive(Debug, Error)]
pub enum ProbeBuildError {
    /// Database URL could not be parsed into connection options
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(#[source] sqlx::Error),

    /// Health check URL is malformed or not http(s)
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// HTTP client could not be configured
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ProbeBuildError {
    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
