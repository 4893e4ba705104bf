//! Event service - Shapes repository results into event responses.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateEvent, EventResponse, UpdateEvent};
use crate::errors::AppResult;
use crate::infra::EventRepository;

/// Event service trait for dependency injection.
#[async_trait]
pub trait EventService: Send + Sync {
    async fn create_event(&self, input: CreateEvent) -> AppResult<EventResponse>;

    async fn get_event(&self, id: i32) -> AppResult<EventResponse>;

    async fn get_all_events(&self) -> AppResult<Vec<EventResponse>>;

    async fn update_event(&self, id: i32, changes: UpdateEvent) -> AppResult<EventResponse>;

    async fn delete_event(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of EventService.
pub struct EventManager {
    repository: Arc<dyn EventRepository>,
}

impl EventManager {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl EventService for EventManager {
    async fn create_event(&self, input: CreateEvent) -> AppResult<EventResponse> {
        let event = self.repository.create(input).await?;
        Ok(EventResponse::from(event))
    }

    async fn get_event(&self, id: i32) -> AppResult<EventResponse> {
        let event = self.repository.get_by_id(id).await?;
        Ok(EventResponse::from(event))
    }

    async fn get_all_events(&self) -> AppResult<Vec<EventResponse>> {
        let events = self.repository.get_all().await?;
        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    async fn update_event(&self, id: i32, changes: UpdateEvent) -> AppResult<EventResponse> {
        let event = self.repository.update(id, changes).await?;
        Ok(EventResponse::from(event))
    }

    async fn delete_event(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
