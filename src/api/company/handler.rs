// Company lookup handler

use serde_json::{json, Value};
use axum::{http::StatusCode, extract::State};

use crate::config::state::AppState;
use crate::database::CompanyRepository;
use crate::models::CompanyStatus;
use crate::utils::response_handler::HandlerResponse;
use tracing::{instrument, info, error};

/// Message returned to callers whenever the store cannot be read
pub const COMPANY_FETCH_ERROR: &str = "Failed to fetch company data";

/// Returns the most recently updated published company, or `{}` if there is none.
/// Store failures are logged and answered with a generic 500.
#[instrument(name = "company_lookup", skip(state))]
pub async fn company_handler(
    State(state): State<AppState>,
) -> HandlerResponse {
    match fetch_published_company(state.companies.as_ref()).await {
        Ok(body) => HandlerResponse::new(StatusCode::OK).json(body),
        Err(e) => {
            error!("Failed to fetch company data: {:#}", e);

            HandlerResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
                .json(json!({ "error": COMPANY_FETCH_ERROR }))
        }
    }
}

/// Single read against the store, serialized to the response body
async fn fetch_published_company(companies: &dyn CompanyRepository) -> anyhow::Result<Value> {
    match companies.find_latest_by_status(CompanyStatus::Published).await? {
        Some(company) => {
            info!(company_id = %company.id, "Found published company");
            Ok(serde_json::to_value(&company)?)
        }
        None => {
            info!("No published company found");
            Ok(json!({}))
        }
    }
}
