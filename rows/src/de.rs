//! Deserialization helpers shared by the row schemas.

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable column, mapping JSON `null` to the default value.
///
/// Combine with `#[serde(default)]` so an absent key defaults the same way.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
