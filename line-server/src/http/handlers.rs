//! HTTP request handlers for the line server endpoints.

use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use line_index::IndexError;
use std::sync::Arc;

/// Handle GET / endpoint.
///
/// Returns the welcome message naming the served file.
pub async fn handle_welcome(State(state): State<Arc<AppState>>) -> String {
    format!(
        "Welcome to the line server. Currently serving lines from {}.",
        state.file_name()
    )
}

/// Handle GET /lines endpoint.
///
/// Reports the served file's name and total line count.
pub async fn handle_listing(State(state): State<Arc<AppState>>) -> String {
    format!(
        "{} contains {} lines.",
        state.file_name(),
        state.store().line_count()
    )
}

/// Handle GET /lines/{line} endpoint.
///
/// Parses the line-number token and returns the line's content without its
/// trailing terminator.
///
/// # Errors
///
/// Returns `AppError` if the token is not a valid non-negative integer
/// (400), the line is out of range (413), or the read fails (500).
pub async fn handle_line(
    Path(token): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    tracing::debug!("Handling line request for token: {}", token);

    let line = parse_line_number(&token, state.store().line_count())?;
    let content = state.store().line(line)?;

    Ok((
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        content,
    )
        .into_response())
}

/// Classify a line-number token.
///
/// A token of pure ASCII digits too large for `u64` is numerically valid
/// and necessarily beyond any addressable line, so it maps to out-of-range
/// rather than bad-request.
fn parse_line_number(token: &str, total: u64) -> Result<u64, AppError> {
    match token.parse::<u64>() {
        Ok(line) => Ok(line),
        Err(_) if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) => {
            Err(AppError::OutOfRange(format!(
                "Line {token} out of range: file has {total} lines"
            )))
        }
        Err(_) => Err(AppError::InvalidLineNumber(format!(
            "Not a valid non-negative line number: {token}"
        ))),
    }
}

/// Application-level error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Token is not a valid non-negative integer (400)
    InvalidLineNumber(String),
    /// Line number at or beyond the file's line count (413)
    OutOfRange(String),
    /// Read failure while fetching a line (500)
    Storage(IndexError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidLineNumber(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::OutOfRange(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            Self::Storage(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        (status, message).into_response()
    }
}

impl From<IndexError> for AppError {
    fn from(err: IndexError) -> Self {
        match err {
            IndexError::OutOfRange { .. } => Self::OutOfRange(err.to_string()),
            other => Self::Storage(other),
        }
    }
}
