// Company route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the company lookup endpoint
pub fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/api/company", get(handler::company_handler))
}
