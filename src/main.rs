// Start of file: src/main.rs

use std::sync::Arc;
use axum::{Router, serve};
use tokio::net::TcpListener;
use tracing::info;

use company_api::config::{environment::EnvironmentVariables, state::AppState};
use company_api::core::{logging, server};
use company_api::database::{DatabaseService, PostgresCompanyRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let environment: Arc<EnvironmentVariables> = Arc::new(EnvironmentVariables::load()?);

    // * The pool is created once and handed to the repository
    let database: DatabaseService = DatabaseService::new(environment.clone());
    database.initialize().await?;

    let companies: PostgresCompanyRepository = PostgresCompanyRepository::new(database.get_pool()?.clone());
    let state: AppState = AppState::new(environment.clone(), Arc::new(companies));

    let app: Router = server::create_app(state);
    let listener: TcpListener = server::setup_listener(&environment).await?;

    info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    database.shutdown().await;

    Ok(())
}

// End of file: src/main.rs
