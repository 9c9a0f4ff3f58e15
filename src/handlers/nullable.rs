//! Tri-state fields for partial updates
//!
//! On an update body, a nullable column arrives as `Option<Option<T>>`:
//! a missing key keeps the stored value, `null` clears it, a value replaces it.
//! Use with `#[serde(default, deserialize_with = "present")]`.

use serde::{Deserialize, Deserializer};

/// Distinguish an explicit `null` from a missing key
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
