//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{EventService, HeroService, ServiceContainer, Services, TokenVerifier};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Bearer token verification
    pub token_verifier: Arc<dyn TokenVerifier>,
    /// Hero service
    pub hero_service: Arc<dyn HeroService>,
    /// Event service
    pub event_service: Arc<dyn EventService>,
    /// Database connection pool
    pub database: Arc<Database>,
    /// Name shown by the root endpoint
    pub project_name: String,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::new(&container, database, config.project_name.clone())
    }

    /// Create application state from any service container.
    pub fn new(
        services: &dyn ServiceContainer,
        database: Arc<Database>,
        project_name: impl Into<String>,
    ) -> Self {
        Self {
            token_verifier: services.auth(),
            hero_service: services.heroes(),
            event_service: services.events(),
            database,
            project_name: project_name.into(),
        }
    }
}
