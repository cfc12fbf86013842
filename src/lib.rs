// Library root for the company API service

pub mod api;
pub mod config;
pub mod core;
pub mod database;
pub mod models;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
pub use crate::database::{CompanyRepository, DatabaseService, PostgresCompanyRepository};
pub use crate::models::{CompanyRecord, CompanyStatus};
