//! Hero repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, Set,
};

use super::base::{conflict_or_db, transaction};
use super::entities::hero::{self, ActiveModel, Entity as HeroEntity};
use crate::domain::{CreateHero, Hero, UpdateHero};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hero repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Insert a new hero. Fails with `AlreadyExists` when the alias is taken.
    async fn create(&self, input: CreateHero) -> AppResult<Hero>;

    /// Find hero by ID
    async fn get_by_id(&self, id: i32) -> AppResult<Hero>;

    /// List all heroes in store order
    async fn get_all(&self) -> AppResult<Vec<Hero>>;

    /// Apply a partial update and return the re-read hero
    async fn update(&self, id: i32, changes: UpdateHero) -> AppResult<Hero>;

    /// Delete hero by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of HeroRepository
pub struct HeroStore {
    db: DatabaseConnection,
}

impl HeroStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::not_found(format!("Hero with id {} not found", id))
}

fn alias_taken(alias: &str) -> String {
    format!("Hero with alias {} already exists", alias)
}

async fn find_hero<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<Hero> {
    HeroEntity::find_by_id(id)
        .one(conn)
        .await?
        .map(Hero::from)
        .ok_or_else(|| not_found(id))
}

#[async_trait]
impl HeroRepository for HeroStore {
    async fn create(&self, input: CreateHero) -> AppResult<Hero> {
        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let CreateHero {
                    name,
                    alias,
                    powers,
                } = input;

                let active_model = ActiveModel {
                    id: NotSet,
                    name: Set(name),
                    alias: Set(alias.clone()),
                    powers: Set(powers),
                };

                let model = active_model
                    .insert(txn)
                    .await
                    .map_err(|e| conflict_or_db(e, || alias_taken(&alias)))?;

                Ok(Hero::from(model))
            })
        })
        .await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Hero> {
        find_hero(&self.db, id).await
    }

    async fn get_all(&self) -> AppResult<Vec<Hero>> {
        let models = HeroEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Hero::from).collect())
    }

    async fn update(&self, id: i32, changes: UpdateHero) -> AppResult<Hero> {
        if changes.is_empty() {
            return Err(AppError::invalid_argument("No fields to update"));
        }

        // The re-read shares the update's transaction so it sees exactly
        // the row this call wrote.
        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let UpdateHero {
                    name,
                    alias,
                    powers,
                } = changes;
                let new_alias = alias.clone();

                let active = ActiveModel {
                    id: NotSet,
                    name: name.map_or(NotSet, Set),
                    alias: alias.map_or(NotSet, Set),
                    powers: powers.map_or(NotSet, Set),
                };

                let result = HeroEntity::update_many()
                    .set(active)
                    .filter(hero::Column::Id.eq(id))
                    .exec(txn)
                    .await
                    .map_err(|e| {
                        conflict_or_db(e, || alias_taken(new_alias.as_deref().unwrap_or_default()))
                    })?;

                if result.rows_affected == 0 {
                    return Err(not_found(id));
                }

                find_hero(txn, id).await
            })
        })
        .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        transaction(&self.db, move |txn| {
            Box::pin(async move {
                let result = HeroEntity::delete_by_id(id)
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
