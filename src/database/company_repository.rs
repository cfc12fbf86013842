// Read access to the `companies` table

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::{CompanyRecord, CompanyStatus};

/// Query interface over stored companies.
///
/// Handlers only see this trait so the store can be swapped for a stub in tests.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Most recently updated company with the given status, if any.
    /// Ties on `updated_at` go to the greatest `id`, so repeated calls agree.
    async fn find_latest_by_status(&self, status: CompanyStatus) -> Result<Option<CompanyRecord>>;
}

/// PostgreSQL implementation of [`CompanyRepository`]
#[derive(Debug, Clone)]
pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    website: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CompanyRow> for CompanyRecord {
    type Error = anyhow::Error;

    fn try_from(row: CompanyRow) -> Result<Self> {
        let status: CompanyStatus = row
            .status
            .parse()
            .with_context(|| format!("Malformed status for company {}", row.id))?;

        Ok(CompanyRecord {
            id: row.id,
            name: row.name,
            description: row.description,
            website: row.website,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn find_latest_by_status(&self, status: CompanyStatus) -> Result<Option<CompanyRecord>> {
        let row: Option<CompanyRow> = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, name, description, website, status, created_at, updated_at
            FROM companies
            WHERE status = $1
            ORDER BY updated_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to query companies")?;

        row.map(CompanyRecord::try_from).transpose()
    }
}
