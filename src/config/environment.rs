// Start of file: /src/config/environment.rs

// * Environment configuration with zero-copy defaults.
// * Loaded once in main and shared through AppState.

use std::{borrow::Cow, collections::HashMap, str::FromStr};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_PASSWORD: &str = "postgres";
const DEFAULT_DB_NAME: &str = "company";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds
const DEFAULT_DB_PORT: u16 = 5432; // Default Postgres port
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_MIN_CONNECTIONS: u32 = 1;
const DEFAULT_DB_INIT_SCHEMA: bool = true;

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
    pub db_host: Cow<'static, str>,
    pub db_port: u16,
    pub db_user: Cow<'static, str>,
    pub db_password: Cow<'static, str>,
    pub db_name: Cow<'static, str>,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    // * Run the bootstrap SQL on startup; turn off for read-only database users
    pub db_init_schema: bool,
}

impl EnvironmentVariables {
    // * Loads environment variables from the process and, outside production, from .env
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars()
            .chain(dotenv::vars())
            .collect();

        let config: EnvironmentVariables = Self::from_lookup(|key: &str| vars.get(key).cloned())?;

        if cfg!(debug_assertions) {
            tracing::debug!("Loaded environment configuration: {:#?}", config.redacted());
        }

        Ok(config)
    }

    // * Builds the configuration from any key lookup, providing defaults if missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &'static str, warn_missing: bool| -> Cow<'static, str> {
            match lookup(key) {
                Some(value) => Cow::Owned(value),
                None => {
                    if warn_missing {
                        warn!("Missing {key}, defaulting to '{default}'");
                    }
                    Cow::Borrowed(default)
                }
            }
        };

        Ok(Self {
            environment: text("ENVIRONMENT", DEFAULT_ENVIRONMENT, true),
            host: text("HOST", DEFAULT_HOST, false),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            max_request_body_size: parse_or(&lookup, "MAX_REQUEST_BODY_SIZE", DEFAULT_MAX_BODY_SIZE)?,
            default_timeout_seconds: parse_or(&lookup, "DEFAULT_TIMEOUT_SECONDS", DEFAULT_TIMEOUT)?,
            db_host: text("DB_HOST", DEFAULT_DB_HOST, true),
            db_port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            db_user: text("DB_USER", DEFAULT_DB_USER, true),
            db_password: text("DB_PASSWORD", DEFAULT_DB_PASSWORD, true),
            db_name: text("DB_NAME", DEFAULT_DB_NAME, true),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            db_min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", DEFAULT_DB_MIN_CONNECTIONS)?,
            db_init_schema: parse_or(&lookup, "DB_INIT_SCHEMA", DEFAULT_DB_INIT_SCHEMA)?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    // * Copy safe to print in logs
    fn redacted(&self) -> Self {
        Self {
            db_password: Cow::Borrowed("***"),
            ..self.clone()
        }
    }
}

// * Parses a typed variable, falling back to the default when it is unset
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|s| s.trim().parse::<T>().with_context(|| format!("Invalid {key} value")))
        .transpose()
        .map(|value| value.unwrap_or(default))
}


// End of file: /src/config/environment.rs
