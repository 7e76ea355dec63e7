//! Line server binary entry point.
//!
//! This is a thin wrapper around the line-server library that:
//! 1. Parses command-line arguments
//! 2. Initializes logging
//! 3. Builds the line index
//! 4. Starts the server
//!
//! For library usage, see the line-server crate documentation.

use anyhow::Result;
use line_server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse configuration from CLI args
    let config = ServerConfig::from_args();

    tracing::info!(
        "Configuration loaded: bind={}, file={:?}",
        config.bind,
        config.file
    );

    // Validate configuration
    config.validate()?;

    // Create and run server
    let server = Server::new(config)?;
    server.run().await?;

    Ok(())
}
