pub mod company_repository;
pub mod postgres_service;

pub use company_repository::{CompanyRepository, PostgresCompanyRepository};
pub use postgres_service::{bootstrap_schema, DatabaseService};
