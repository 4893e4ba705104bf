//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod base;
pub(crate) mod entities;
mod event_repository;
mod hero_repository;

pub use event_repository::{EventRepository, EventStore};
pub use hero_repository::{HeroRepository, HeroStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use event_repository::MockEventRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use hero_repository::MockHeroRepository;
