//! Hero API - CRUD service for heroes and events
//!
//! Every resource route requires a bearer JWT. Records live in a relational
//! store reached through SeaORM; each mutation runs inside its own
//! transaction.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Hero and event records plus their request/response DTOs
//! - **services**: Token verification and resource services
//! - **infra**: Database connection, migrations and repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response and patch helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Event, Hero};
pub use errors::{AppError, AppResult};
pub use infra::Database;
