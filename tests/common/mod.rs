//! tests/common/mod.rs
//! Shared helpers: stub company stores and a function that spawns the
//! real router on an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{serve, Router};
use chrono::{DateTime, TimeZone, Utc};
use company_api::{create_app, AppState, CompanyRecord, CompanyRepository, CompanyStatus, EnvironmentVariables};
use tokio::net::TcpListener as TokioTcpListener;
use uuid::Uuid;

/// In-memory store with the same selection rule as the SQL query:
/// newest `updated_at` first, then greatest `id`.
#[derive(Default)]
pub struct InMemoryCompanyRepository {
    records: Vec<CompanyRecord>,
    calls: AtomicUsize,
}

impl InMemoryCompanyRepository {
    pub fn new(records: Vec<CompanyRecord>) -> Arc<Self> {
        Arc::new(Self {
            records,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn find_latest_by_status(&self, status: CompanyStatus) -> anyhow::Result<Option<CompanyRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok(self
            .records
            .iter()
            .filter(|record| record.status == status)
            .max_by_key(|record| (record.updated_at, record.id))
            .cloned())
    }
}

/// Store whose every query fails, like an unreachable database.
pub struct FailingCompanyRepository;

#[async_trait]
impl CompanyRepository for FailingCompanyRepository {
    async fn find_latest_by_status(&self, _status: CompanyStatus) -> anyhow::Result<Option<CompanyRecord>> {
        Err(anyhow::anyhow!("pool timed out while waiting for an open connection"))
    }
}

/// Store that never answers within the request timeout.
pub struct HangingCompanyRepository;

#[async_trait]
impl CompanyRepository for HangingCompanyRepository {
    async fn find_latest_by_status(&self, _status: CompanyStatus) -> anyhow::Result<Option<CompanyRecord>> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(None)
    }
}

pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap()
}

pub fn company(name: &str, status: CompanyStatus, updated_at: DateTime<Utc>) -> CompanyRecord {
    CompanyRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        website: Some(format!("https://{}.test", name.to_lowercase())),
        status,
        created_at: at(0),
        updated_at,
    }
}

/// Test configuration: one second timeout and a 1KB body limit.
pub fn test_environment() -> EnvironmentVariables {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("ENVIRONMENT", "test"),
        ("DEFAULT_TIMEOUT_SECONDS", "1"),
        ("MAX_REQUEST_BODY_SIZE", "1024"),
    ]);

    EnvironmentVariables::from_lookup(|key: &str| vars.get(key).map(|v| v.to_string()))
        .expect("Failed to build test environment")
}

/// Spawns the app on a random unused port and returns its base URL.
pub async fn spawn_app(companies: Arc<dyn CompanyRepository>) -> String {
    let state: AppState = AppState::new(Arc::new(test_environment()), companies);
    let app: Router = create_app(state);

    let listener: TokioTcpListener = TokioTcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let addr: std::net::SocketAddr = listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
