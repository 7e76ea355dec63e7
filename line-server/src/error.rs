//! Error types for the line server.
//!
//! All errors use thiserror for consistent error handling across the codebase.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration value
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

/// Server runtime errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind HTTP server
    #[error("Failed to bind HTTP server to {addr}: {source}")]
    BindFailed {
        /// Address that failed to bind
        addr: std::net::SocketAddr,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Index build or file access error
    #[error("Index error: {0}")]
    Index(#[from] line_index::IndexError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server shutdown error
    #[error("Server shutdown error: {0}")]
    Shutdown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::MissingRequired("file to serve not found: ./nope".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required configuration: file to serve not found: ./nope"
        );
    }

    #[test]
    fn test_server_error_conversion() {
        let idx_err = line_index::IndexError::OutOfRange { line: 5, total: 3 };
        let server_err: ServerError = idx_err.into();
        assert!(server_err.to_string().contains("out of range"));

        let cfg_err = ConfigError::MissingRequired("x".to_string());
        let server_err: ServerError = cfg_err.into();
        assert!(matches!(server_err, ServerError::Config(_)));
    }
}
