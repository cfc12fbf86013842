// Response type returned by every handler
// Carries a status code and an optional JSON body, and logs what is sent

use axum::{
    http::StatusCode,
    Json,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{debug, error};

use crate::utils::json::to_two_space_indented_json;

/// Convenience struct for building responses in handlers
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    pub status_code: StatusCode,
    pub body: Option<Value>,
}

impl HandlerResponse {
    /// Creates a new response with specified status code and no body
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            body: None,
        }
    }

    /// Sets the JSON body of the response
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Logs the outgoing response with proper JSON indentation
fn log_response(response: &HandlerResponse) {
    match &response.body {
        Some(body) => match to_two_space_indented_json(body) {
            Ok(spaced_json) => debug!(status = response.status_code.as_u16(), "\nFinal response:\n{}", spaced_json),
            Err(err) => error!("Failed to format response JSON: {:?}", err),
        },
        None => debug!(status = response.status_code.as_u16(), "Final response has no body"),
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        log_response(&self);

        match self.body {
            Some(body) => (self.status_code, Json(body)).into_response(),
            None => self.status_code.into_response(),
        }
    }
}
