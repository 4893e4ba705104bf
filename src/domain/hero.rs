//! Hero domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::types::patch;

/// Hero domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: i32,
    pub name: String,
    pub alias: String,
    pub powers: Option<String>,
}

/// Hero creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct CreateHero {
    /// Hero's real name
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[schema(example = "Clark Kent", min_length = 1, max_length = 100)]
    pub name: String,
    /// Hero's superhero name, unique across all heroes
    #[validate(length(min = 1, max = 100, message = "alias must be between 1 and 100 characters"))]
    #[schema(example = "Superman", min_length = 1, max_length = 100)]
    pub alias: String,
    /// Description of the hero's powers
    #[schema(example = "flight")]
    pub powers: Option<String>,
}

/// Partial hero update.
///
/// Absent fields are left untouched. `powers` may be explicitly set to
/// `null` to clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UpdateHero {
    /// New real name
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[schema(example = "Kal-El")]
    pub name: Option<String>,
    /// New alias
    #[validate(length(min = 1, max = 100, message = "alias must be between 1 and 100 characters"))]
    #[schema(example = "Superman2")]
    pub alias: Option<String>,
    /// New powers description, `null` clears it
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>, example = "flight")]
    pub powers: Option<Option<String>>,
}

impl UpdateHero {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.alias.is_none() && self.powers.is_none()
    }
}

/// Hero response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Clark Kent")]
    pub name: String,
    #[schema(example = "Superman")]
    pub alias: String,
    #[schema(example = "flight")]
    pub powers: Option<String>,
}

impl From<Hero> for HeroResponse {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            alias: hero.alias,
            powers: hero.powers,
        }
    }
}
