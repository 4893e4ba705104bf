//! Service Container - Centralized service access.
//!
//! Builds each service on top of its own repository; every repository
//! shares the process-wide connection pool.

use std::sync::Arc;

use super::{
    EventManager, EventService, HeroManager, HeroService, JwtVerifier, TokenVerifier,
};
use crate::config::Config;
use crate::infra::{EventStore, HeroStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get token verifier
    fn auth(&self) -> Arc<dyn TokenVerifier>;

    /// Get hero service
    fn heroes(&self) -> Arc<dyn HeroService>;

    /// Get event service
    fn events(&self) -> Arc<dyn EventService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    token_verifier: Arc<dyn TokenVerifier>,
    hero_service: Arc<dyn HeroService>,
    event_service: Arc<dyn EventService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        token_verifier: Arc<dyn TokenVerifier>,
        hero_service: Arc<dyn HeroService>,
        event_service: Arc<dyn EventService>,
    ) -> Self {
        Self {
            token_verifier,
            hero_service,
            event_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let hero_repo = Arc::new(HeroStore::new(db.clone()));
        let event_repo = Arc::new(EventStore::new(db));

        Self {
            token_verifier: Arc::new(JwtVerifier::new(config)),
            hero_service: Arc::new(HeroManager::new(hero_repo)),
            event_service: Arc::new(EventManager::new(event_repo)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn TokenVerifier> {
        self.token_verifier.clone()
    }

    fn heroes(&self) -> Arc<dyn HeroService> {
        self.hero_service.clone()
    }

    fn events(&self) -> Arc<dyn EventService> {
        self.event_service.clone()
    }
}
