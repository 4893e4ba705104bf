//! Infrastructure layer - External systems integration
//!
//! This module handles the relational store:
//! - Database connections and migrations
//! - Repositories and their transaction handling

pub mod db;
pub mod repositories;

pub use db::{Database, MigrationState, Migrator};
pub use repositories::{EventRepository, EventStore, HeroRepository, HeroStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockEventRepository, MockHeroRepository};
