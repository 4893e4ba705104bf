//! Helpers for partial update payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field of a partial update.
///
/// Paired with `#[serde(default)]`: an absent key stays `None`, an explicit
/// `null` becomes `Some(None)` and a value becomes `Some(Some(value))`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
