// =============================================================================
// DATABASE SERVICE - PostgreSQL pool lifecycle
// =============================================================================

use std::sync::Arc;
use std::time::Duration;
use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{ConnectOptions, PgPool, Executor};
use tokio::sync::OnceCell;
use tracing::{debug, info, log::LevelFilter};

use crate::config::environment::EnvironmentVariables;

// =============================================================================
// SQL CONSTANTS
// =============================================================================

/// Single initialization SQL script
const INIT_SCHEMA_SQL: &str = include_str!("sql/schemas/schema_init.sql");

// =============================================================================
// DATABASE SERVICE
// =============================================================================

/// Database service managing a single PostgreSQL connection pool.
#[derive(Clone, Debug)]
pub struct DatabaseService {
    /// Single connection pool for the application
    pool: Arc<OnceCell<PgPool>>,
    /// Environment configuration
    config: Arc<EnvironmentVariables>,
}

impl DatabaseService {
    /// Creates a new DatabaseService instance.
    /// Note: The pool is not initialized until `initialize()` is called.
    pub fn new(config: Arc<EnvironmentVariables>) -> Self {
        Self {
            pool: Arc::new(OnceCell::new()),
            config,
        }
    }

    /// Initializes the database service by creating the pool and running the bootstrap script.
    pub async fn initialize(&self) -> Result<()> {
        info!("Initializing DatabaseService...");

        self.pool.get_or_try_init(|| async {
            self.create_pool().await
        }).await?;

        let pool: &PgPool = self.get_pool()?;

        if self.config.db_init_schema {
            bootstrap_schema(pool).await?;
        } else {
            info!("DB_INIT_SCHEMA is off, expecting the companies table to exist");
        }

        info!("DatabaseService initialized successfully");
        Ok(())
    }

    /// Gracefully shuts down the service.
    pub async fn shutdown(&self) {
        info!("Initiating DatabaseService shutdown...");
        if let Some(pool) = self.pool.get() {
            pool.close().await;
            info!("Database connection pool closed");
        } else {
            debug!("Database pool was not initialized, nothing to close");
        }
    }

    /// Returns the connection pool.
    /// Errors if the pool has not been initialized.
    pub fn get_pool(&self) -> Result<&PgPool> {
        self.pool.get().ok_or_else(|| anyhow::anyhow!("Database pool not initialized"))
    }
}

// =============================================================================
// INTERNAL HELPERS
// =============================================================================

impl DatabaseService {
    /// Creates the connection pool based on environment config
    async fn create_pool(&self) -> Result<PgPool> {
        let connect_options: PgConnectOptions = self.create_connect_options();

        let pool: PgPool = PgPoolOptions::new()
            .max_connections(self.config.db_max_connections)
            .min_connections(self.config.db_min_connections)
            .idle_timeout(Duration::from_secs(30))
            .connect_with(connect_options)
            .await
            .with_context(|| format!(
                "Failed to connect to database '{}' at {}:{}",
                self.config.db_name, self.config.db_host, self.config.db_port
            ))?;

        Ok(pool)
    }

    /// Creates connection options with SSL and UTC timezone
    fn create_connect_options(&self) -> PgConnectOptions {
        let options: PgConnectOptions = PgConnectOptions::new()
            .host(&self.config.db_host)
            .port(self.config.db_port)
            .username(&self.config.db_user)
            .password(&self.config.db_password)
            .database(&self.config.db_name)
            .log_statements(LevelFilter::Debug)
            .options([
                ("timezone", "UTC"),
                ("application_name", "company-api"),
            ]);

        // Require TLS everywhere except local development
        if self.config.is_production() {
            options.ssl_mode(PgSslMode::Require)
        } else {
            options.ssl_mode(PgSslMode::Prefer)
        }
    }
}

/// Runs the idempotent bootstrap script that creates the `companies` table.
pub async fn bootstrap_schema(pool: &PgPool) -> Result<()> {
    info!("Executing schema initialization...");

    pool.execute(INIT_SCHEMA_SQL)
        .await
        .context("Failed to execute schema initialization SQL")?;

    info!("Schema initialization completed");
    Ok(())
}
