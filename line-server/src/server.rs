//! Server state management and orchestration.
//!
//! Builds the line index once at startup, wraps it in shared read-only
//! state and runs the HTTP listener against it.

use crate::config::ServerConfig;
use crate::error::ServerError;
use line_index::LineStore;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for request handlers.
///
/// Initialized exactly once at startup and never mutated afterwards; every
/// handler reads it concurrently without locking.
#[derive(Debug)]
pub struct AppState {
    /// Indexed line store (built once at startup)
    store: LineStore,

    /// Name under which the served file is reported in responses
    file_name: String,
}

impl AppState {
    /// Build the line index and open the served file.
    ///
    /// This is the one-time startup scan; it must complete before the
    /// listener opens.
    ///
    /// # Errors
    ///
    /// Returns `ServerError` if the file cannot be opened or indexed.
    pub fn new(config: &ServerConfig) -> Result<Self, ServerError> {
        tracing::info!("Indexing {}...", config.file.display());
        let started = Instant::now();

        let store = LineStore::open(&config.file)?;

        tracing::info!(
            "Indexed {} lines ({} bytes) in {:.2?}",
            store.line_count(),
            store.file_size(),
            started.elapsed()
        );

        Ok(Self {
            store,
            file_name: config.display_name(),
        })
    }

    /// Get reference to the line store.
    #[must_use]
    pub const fn store(&self) -> &LineStore {
        &self.store
    }

    /// Name of the served file.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Server orchestration.
pub struct Server {
    /// Shared application state
    state: Arc<AppState>,
    /// Server configuration
    config: ServerConfig,
}

impl Server {
    /// Create new server with configuration.
    ///
    /// Runs the startup scan; the server refuses to start if the file
    /// cannot be indexed.
    ///
    /// # Errors
    ///
    /// Returns `ServerError` if the index build fails.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let state = AppState::new(&config)?;

        Ok(Self {
            state: Arc::new(state),
            config,
        })
    }

    /// Run the server until interrupted.
    ///
    /// # Errors
    ///
    /// Returns `ServerError` if binding fails or the listener errors.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(
            "Serving lines from {} on {}",
            self.state.file_name(),
            self.config.bind
        );

        crate::http::start_server(self.config.bind, self.state).await
    }

    /// Get shared application state (for testing).
    #[cfg(test)]
    #[must_use]
    pub const fn state(&self) -> &Arc<AppState> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"zero\none\ntwo\n").unwrap();
        file
    }

    fn test_config(file: &NamedTempFile) -> ServerConfig {
        ServerConfig {
            bind: "127.0.0.1:0".parse().unwrap(),
            file: file.path().to_path_buf(),
        }
    }

    #[test]
    fn test_app_state_creation() {
        let file = create_test_file();
        let state = AppState::new(&test_config(&file)).unwrap();

        assert_eq!(state.store().line_count(), 3);
        assert_eq!(state.store().line(1).unwrap(), "one");
    }

    #[test]
    fn test_app_state_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            bind: "127.0.0.1:0".parse().unwrap(),
            file: dir.path().join("missing.txt"),
        };

        let err = AppState::new(&config).unwrap_err();
        assert!(matches!(err, ServerError::Index(_)));
    }

    #[test]
    fn test_server_creation() {
        let file = create_test_file();
        let server = Server::new(test_config(&file)).unwrap();
        assert_eq!(server.state().store().line_count(), 3);
    }
}
