//! Server error types.

use thiserror::Error;

/// Server result type.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Required API key is missing.
    #[error("ALLORA_API_KEY is required. Set the environment variable or pass --api-key.")]
    MissingApiKey,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client error.
    #[error("{0}")]
    Client(#[from] allora_client::ClientError),

    /// Transport error (MCP serve/shutdown).
    #[error("Transport error: {0}")]
    Transport(String),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Transport/runtime errors: 1
            Self::Transport(_) => 1,
            // Config errors: 3
            Self::MissingApiKey | Self::Config(_) => 3,
            // Remote API errors: 5
            Self::Client(_) => 5,
            // IO errors: 9
            Self::Io(_) => 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message_names_the_variable() {
        let err = ServerError::MissingApiKey;
        assert!(err.to_string().contains("ALLORA_API_KEY"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ServerError::MissingApiKey.exit_code(), 3);
        assert_eq!(ServerError::config("bad").exit_code(), 3);
        assert_eq!(ServerError::transport("eof").exit_code(), 1);
        assert_eq!(
            ServerError::Client(allora_client::ClientError::network("down")).exit_code(),
            5
        );
    }
}
