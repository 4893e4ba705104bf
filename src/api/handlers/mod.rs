//! HTTP request handlers.

pub mod event_handler;
pub mod hero_handler;

pub use event_handler::event_routes;
pub use hero_handler::hero_routes;
