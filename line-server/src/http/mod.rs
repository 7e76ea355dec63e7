//! HTTP server implementation using axum.

use crate::error::ServerError;
use crate::server::AppState;
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod handlers;

/// Create HTTP router with all endpoints.
///
/// The line routes are registered in both bare and trailing-slash form;
/// clients of the original service used either.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::handle_welcome))
        .route("/lines", get(handlers::handle_listing))
        .route("/lines/", get(handlers::handle_listing))
        .route("/lines/{line}", get(handlers::handle_line))
        .route("/lines/{line}/", get(handlers::handle_line))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start HTTP server.
///
/// # Errors
///
/// Returns `ServerError` if the server fails to bind or encounters a runtime error.
pub async fn start_server(bind_addr: SocketAddr, state: Arc<AppState>) -> Result<(), ServerError> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|source| ServerError::BindFailed {
            addr: bind_addr,
            source,
        })?;

    tracing::info!("HTTP server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Shutdown(format!("HTTP server error: {e}")))?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    } else {
        tracing::info!("Shutdown signal received, stopping server");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        use crate::config::ServerConfig;
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"zero\none\n").unwrap();

        let config = ServerConfig {
            bind: "0.0.0.0:3000".parse().unwrap(),
            file: file.path().to_path_buf(),
        };

        let state = Arc::new(AppState::new(&config).unwrap());
        let _router = create_router(state);

        // Test passes if router creation succeeds without panic
    }
}
