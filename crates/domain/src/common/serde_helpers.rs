//! Serde helpers for partial-update payloads and persisted numbers.

use serde::{ser::Error as _, Deserialize, Deserializer, Serializer};

/// Deserializes a present field into `Some(value)`, keeping `null` as `Some(None)`.
///
/// Pair with `#[serde(default)]` so a missing key stays `None`. This lets an
/// update distinguish "leave the field alone" from "clear the field".
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Serializes an `f64`, refusing NaN and infinities.
///
/// JSON has no spelling for them and `serde_json` would write `null`, which
/// the plain `f64` field cannot read back.
pub fn finite_f64<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(S::Error::custom(format!(
            "non-finite number {value} cannot be stored"
        )))
    }
}
