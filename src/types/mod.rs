//! Shared types used across handlers and DTOs.

pub mod patch;
mod response;

pub use response::{Created, NoContent};
