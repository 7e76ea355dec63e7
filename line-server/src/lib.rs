//! Line server implementation.
//!
//! Serves individual lines of an arbitrarily large text file over HTTP by
//! line number, without loading the file into memory. The file is scanned
//! exactly once at startup to build a byte-offset line index; every request
//! afterwards is an O(1) index lookup plus one positioned read.
//!
//! # Architecture
//!
//! The server uses a library-first design with the following components:
//! - `server`: startup orchestration and shared state
//! - `config`: configuration loading and validation
//! - `http`: HTTP router and request handlers
//!
//! The index builder and positioned-read file access live in the
//! `line-index` crate.
//!
//! # Example
//!
//! ```no_run
//! use line_server::{Server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Initialize logging
//!     tracing_subscriber::fmt::init();
//!
//!     // Load configuration from CLI args and environment
//!     let config = ServerConfig::from_args();
//!     config.validate()?;
//!
//!     // Create and run server
//!     let server = Server::new(config)?;
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

// Module declarations
pub mod config;
pub mod error;
pub mod http;
pub mod server;

// Re-exports for public API
pub use config::ServerConfig;
pub use error::{ConfigError, ServerError};
pub use server::{AppState, Server};
