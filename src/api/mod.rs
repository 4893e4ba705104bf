//! HTTP surface: routing, bearer authentication and request handlers.
//!
//! Handlers stay thin. They extract and validate input, call the matching
//! service, and let `AppError` turn failures into responses.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
