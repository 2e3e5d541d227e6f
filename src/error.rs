//! Crate-level error types.
//!
//! [`DompetError`] unifies every error source (configuration, HTTP,
//! JSON, API envelope) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator for easy
//! propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DompetError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum DompetError {
    /// Configuration is missing or inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// An HTTP request failed before a response body was produced.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API rejected our credentials.
    #[error("authentication error: {0}")]
    Auth(String),

    /// The API answered with an error envelope or unexpected status.
    #[error("api error: {0}")]
    Api(String),

    /// A response parsed but violated a structural invariant.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Terminal or other I/O failure.
    #[error("io error: {0}")]
    Io(String),
}
