//! Error types for the Allora API client.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the Allora API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure reaching the API.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success HTTP status.
    #[error("API returned status {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The response envelope carried no data payload.
    #[error("API response carried no {0} data")]
    MissingData(&'static str),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// All retry attempts failed.
    #[error("all {attempts} attempts failed, last error: {last}")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Message of the last underlying error
        last: String,
    },
}

impl ClientError {
    /// Create a new Network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new Decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a new Config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}
