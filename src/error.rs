use http::StatusCode;
use thiserror::Error;

/// Errors raised while building or using an authenticated client.
#[derive(Debug, Error)]
pub enum Error {
    /// A required constructor argument was missing or malformed.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The token provider failed to supply a usable token.
    #[error("authentication failed: {0}")]
    Authentication(#[source] azure_core::Error),

    /// The remote API answered with a non-success status.
    #[error("request to {url} failed with status {status}")]
    Http { status: StatusCode, url: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] http::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The owning service was released before the call was made.
    #[error("{0} has already been released")]
    Disposed(&'static str),
}

impl Error {
    pub(crate) fn configuration<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self::Configuration(message.into())
    }

    /// The HTTP status carried by an [`Error::Http`] failure.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject empty or whitespace-only values for a required argument.
pub(crate) fn require_non_empty(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::configuration(format!("{name} must not be empty")));
    }
    Ok(())
}
