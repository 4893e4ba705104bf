//! Application services layer.
//!
//! Services sit between the HTTP handlers and the repositories. They hold
//! only a repository handle and reshape results into response DTOs;
//! repository errors pass through unchanged.

mod auth_service;
pub mod container;
mod event_service;
mod hero_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{Claims, JwtVerifier, TokenVerifier};
pub use event_service::{EventManager, EventService};
pub use hero_service::{HeroManager, HeroService};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockTokenVerifier;
