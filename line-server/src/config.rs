//! Server configuration management.
//!
//! Configuration comes from CLI arguments with environment-variable
//! fallbacks and defaults, and is validated before the server starts.
//!
//! # Configuration Sources
//!
//! Configuration can be provided via:
//! - CLI arguments (`--bind`, `--file`)
//! - Environment variables (`LINE_SERVER_BIND`, `LINE_SERVER_FILE`)
//! - Default values
//!
//! # Example
//!
//! ```no_run
//! use line_server::ServerConfig;
//!
//! // Load from CLI args and environment
//! let config = ServerConfig::from_args();
//!
//! // Validate configuration
//! config.validate().expect("Invalid configuration");
//!
//! println!("Serving {} on {}", config.display_name(), config.bind);
//! ```

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration loaded from CLI args and environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "line-server",
    about = "Serve individual lines of a huge text file over HTTP",
    version
)]
pub struct ServerConfig {
    /// HTTP bind address
    #[arg(long, env = "LINE_SERVER_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Path to the text file to serve
    #[arg(long, env = "LINE_SERVER_FILE", default_value = "./testfile.txt")]
    pub file: PathBuf,
}

impl ServerConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Name under which the served file is reported in responses.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.file.file_name().map_or_else(
            || self.file.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file to serve does not exist.
    pub fn validate(&self) -> Result<(), crate::error::ConfigError> {
        use crate::error::ConfigError;

        if !self.file.exists() {
            return Err(ConfigError::MissingRequired(format!(
                "file to serve not found: {}",
                self.file.display()
            )));
        }

        Ok(())
    }
}
