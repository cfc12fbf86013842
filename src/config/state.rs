// Application state shared with every handler through axum's State extractor

use std::sync::Arc;

use crate::config::environment::EnvironmentVariables;
use crate::database::CompanyRepository;

#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub companies: Arc<dyn CompanyRepository>,
}

impl AppState {
    /// Creates the state from already-built dependencies
    pub fn new(
        environment: Arc<EnvironmentVariables>,
        companies: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            environment,
            companies,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.environment.environment)
            .finish_non_exhaustive()
    }
}
