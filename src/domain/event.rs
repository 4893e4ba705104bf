//! Event domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::types::patch;

/// Event domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub value: Value,
    pub created_at: Option<DateTime<Utc>>,
}

/// Event creation data transfer object
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    /// Event name
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[schema(example = "launch", min_length = 1, max_length = 100)]
    pub name: String,
    /// Arbitrary JSON object payload
    #[serde(default = "empty_value")]
    #[validate(custom(function = "validate_object"))]
    #[schema(value_type = Object, example = json!({"stage": 1}))]
    pub value: Value,
    /// Optional timestamp, never filled in by the server
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial event update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    /// New event name
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[schema(example = "landing")]
    pub name: Option<String>,
    /// Replacement payload
    #[validate(custom(function = "validate_object"))]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
    /// New timestamp, `null` clears it
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<Option<DateTime<Utc>>>,
}

impl UpdateEvent {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.value.is_none() && self.created_at.is_none()
    }
}

/// Event response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "launch")]
    pub name: String,
    #[schema(value_type = Object)]
    pub value: Value,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            value: event.value,
            created_at: event.created_at,
        }
    }
}

/// Payload used when none is supplied or stored.
pub fn empty_value() -> Value {
    Value::Object(Map::new())
}

fn validate_object(value: &Value) -> Result<(), ValidationError> {
    if value.is_object() {
        Ok(())
    } else {
        let mut err = ValidationError::new("object");
        err.message = Some("value must be a JSON object".into());
        Err(err)
    }
}
