// Company record as stored in the `companies` table and returned by the API

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication state of a company record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanyStatus {
    Draft,
    Published,
    Archived,
}

impl CompanyStatus {
    /// Value stored in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Draft => "DRAFT",
            CompanyStatus::Published => "PUBLISHED",
            CompanyStatus::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(CompanyStatus::Draft),
            "PUBLISHED" => Ok(CompanyStatus::Published),
            "ARCHIVED" => Ok(CompanyStatus::Archived),
            other => Err(anyhow::anyhow!("Unknown company status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub status: CompanyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
