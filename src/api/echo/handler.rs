// Placeholder /api handlers
// The response only depends on the HTTP method

use serde_json::json;
use axum::{http::StatusCode, body::Bytes, extract::rejection::BytesRejection};

use crate::utils::error_handler::error_response;
use crate::utils::response_handler::HandlerResponse;
use tracing::{instrument, debug, warn};

/// GET and POST: `{"message": ""}`, whatever the request carried.
/// A body that cannot be read (e.g. over the size limit) gets a JSON error instead.
#[instrument(skip(body))]
pub async fn echo_handler(
    body: Result<Bytes, BytesRejection>,        // Read so that body-size limits still apply
) -> HandlerResponse {
    let body: Bytes = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            return error_response(rejection.status());
        }
    };

    debug!("Ignoring {} byte request body", body.len());

    HandlerResponse::new(StatusCode::OK)
        .json(json!({ "message": "" }))
}

/// OPTIONS: empty 200 for CORS preflight
#[instrument]
pub async fn echo_preflight_handler() -> HandlerResponse {
    HandlerResponse::new(StatusCode::OK)
}
