//! Hero service - Shapes repository results into hero responses.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateHero, HeroResponse, UpdateHero};
use crate::errors::AppResult;
use crate::infra::HeroRepository;

/// Hero service trait for dependency injection.
#[async_trait]
pub trait HeroService: Send + Sync {
    /// Create a new hero
    async fn create_hero(&self, input: CreateHero) -> AppResult<HeroResponse>;

    /// Get hero by ID
    async fn get_hero(&self, id: i32) -> AppResult<HeroResponse>;

    /// List all heroes
    async fn get_all_heroes(&self) -> AppResult<Vec<HeroResponse>>;

    /// Apply a partial update
    async fn update_hero(&self, id: i32, changes: UpdateHero) -> AppResult<HeroResponse>;

    /// Delete hero by ID
    async fn delete_hero(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of HeroService.
pub struct HeroManager {
    repository: Arc<dyn HeroRepository>,
}

impl HeroManager {
    /// Create new hero service instance
    pub fn new(repository: Arc<dyn HeroRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl HeroService for HeroManager {
    async fn create_hero(&self, input: CreateHero) -> AppResult<HeroResponse> {
        let hero = self.repository.create(input).await?;
        Ok(HeroResponse::from(hero))
    }

    async fn get_hero(&self, id: i32) -> AppResult<HeroResponse> {
        let hero = self.repository.get_by_id(id).await?;
        Ok(HeroResponse::from(hero))
    }

    async fn get_all_heroes(&self) -> AppResult<Vec<HeroResponse>> {
        let heroes = self.repository.get_all().await?;
        Ok(heroes.into_iter().map(HeroResponse::from).collect())
    }

    async fn update_hero(&self, id: i32, changes: UpdateHero) -> AppResult<HeroResponse> {
        let hero = self.repository.update(id, changes).await?;
        Ok(HeroResponse::from(hero))
    }

    async fn delete_hero(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
