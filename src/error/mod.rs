//! Error types for newsdeck.
//!
//! - [`NetworkError`]: the classified failure of one call to the agent service
//! - [`DeckError`]: crate-level error for startup and I/O
//! - [`DeckResult<T>`]: result alias over `DeckError`
//!
//! Failures of API calls are never propagated past the operation that issued
//! them. They end up as an inline placeholder, a synthetic chat message or a
//! status notification. `DeckError` only covers startup concerns (config,
//! logging, terminal I/O).

mod network;

pub use network::NetworkError;

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// A call to the agent service failed.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias for fallible newsdeck operations.
pub type DeckResult<T> = Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_converts_transparently() {
        let err: DeckError = NetworkError::Cancelled.into();
        assert!(matches!(err, DeckError::Network(NetworkError::Cancelled)));
        assert_eq!(err.to_string(), "Request cancelled");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: DeckError = io_err.into();
        assert!(matches!(err, DeckError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_config_error_display() {
        let err = DeckError::Config("unknown view 'inbox'".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown view 'inbox'");
    }
}
