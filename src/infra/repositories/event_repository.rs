//! Event repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, Set,
};

use super::base::transaction;
use super::entities::event::{self, ActiveModel, Entity as EventEntity};
use crate::domain::{CreateEvent, Event, UpdateEvent};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Event repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert a new event
    async fn create(&self, input: CreateEvent) -> AppResult<Event>;

    /// Find event by ID
    async fn get_by_id(&self, id: i32) -> AppResult<Event>;

    /// List all events in store order
    async fn get_all(&self) -> AppResult<Vec<Event>>;

    /// Apply a partial update and return the re-read event
    async fn update(&self, id: i32, changes: UpdateEvent) -> AppResult<Event>;

    /// Delete event by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of EventRepository
pub struct EventStore {
    db: DatabaseConnection,
}

impl EventStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::not_found(format!("Event with id {} not found", id))
}

async fn find_event<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<Event> {
    EventEntity::find_by_id(id)
        .one(conn)
        .await?
        .map(Event::from)
        .ok_or_else(|| not_found(id))
}

#[async_trait]
impl EventRepository for EventStore {
    async fn create(&self, input: CreateEvent) -> AppResult<Event> {
        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let active_model = ActiveModel {
                    id: NotSet,
                    name: Set(input.name),
                    value: Set(Some(input.value)),
                    created_at: Set(input.created_at),
                };

                let model = active_model.insert(txn).await.map_err(AppError::from)?;
                Ok(Event::from(model))
            })
        })
        .await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Event> {
        find_event(&self.db, id).await
    }

    async fn get_all(&self) -> AppResult<Vec<Event>> {
        let models = EventEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Event::from).collect())
    }

    async fn update(&self, id: i32, changes: UpdateEvent) -> AppResult<Event> {
        if changes.is_empty() {
            return Err(AppError::invalid_argument("No fields to update"));
        }

        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let active = ActiveModel {
                    id: NotSet,
                    name: changes.name.map_or(NotSet, Set),
                    value: changes.value.map_or(NotSet, |value| Set(Some(value))),
                    created_at: changes.created_at.map_or(NotSet, Set),
                };

                let result = EventEntity::update_many()
                    .set(active)
                    .filter(event::Column::Id.eq(id))
                    .exec(txn)
                    .await
                    .map_err(AppError::from)?;

                if result.rows_affected == 0 {
                    return Err(not_found(id));
                }

                find_event(txn, id).await
            })
        })
        .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let result = EventEntity::delete_by_id(id)
                    .exec(txn)
                    .await
                    .map_err(AppError::from)?;

                if result.rows_affected == 0 {
                    return Err(not_found(id));
                }

                Ok(())
            })
        })
        .await
    }
}
