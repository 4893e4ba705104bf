//! Domain layer - Core business entities and transfer objects
//!
//! Entities here are fixed-shape records. Storage models never leave the
//! repository layer; they are converted into these types at its boundary.

pub mod event;
pub mod hero;

pub use event::{CreateEvent, Event, EventResponse, UpdateEvent};
pub use hero::{CreateHero, Hero, HeroResponse, UpdateHero};
