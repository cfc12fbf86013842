// Echo route definitions

use axum::{
    routing::get,
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router for the placeholder /api endpoint
pub fn echo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api",
            get(handler::echo_handler)
                .post(handler::echo_handler)
                .options(handler::echo_preflight_handler),
        )
}
