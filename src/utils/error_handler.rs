// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
};
use serde_json::json;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::{instrument, warn};

use crate::utils::response_handler::HandlerResponse;

/// Maps errors raised by the middleware stack to HTTP responses.
/// Body-size limits are enforced by extractors and never arrive here.
pub async fn handle_global_error(err: BoxError) -> HandlerResponse {
    let status_code: StatusCode = status_for_error(&err);

    warn!(status = status_code.as_u16(), "Request failed in middleware: {}", err);

    error_response(status_code)
}

fn status_for_error(err: &BoxError) -> StatusCode {
    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    // Otherwise, 500
    StatusCode::INTERNAL_SERVER_ERROR
}

/// JSON body `{"error": "<reason>"}` for a bare status code
pub fn error_response(status_code: StatusCode) -> HandlerResponse {
    let reason: &str = status_code.canonical_reason().unwrap_or("Unknown Status");

    HandlerResponse::new(status_code).json(json!({ "error": reason }))
}

/// Answers requests that match no route
#[instrument]
pub async fn fallback_handler() -> HandlerResponse {
    error_response(StatusCode::NOT_FOUND)
}
