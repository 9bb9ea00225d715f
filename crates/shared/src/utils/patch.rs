use serde::{Deserialize, Deserializer};

/// Deserializer for partial-update fields, used together with `#[serde(default)]`.
///
/// A missing key never reaches this function and falls back to `None`. Any key
/// that is present is wrapped in `Some`, so `""`, `false` and `[]` all count as
/// an explicit overwrite. `null` is passed to `T` as-is and fails for
/// non-nullable types instead of silently meaning "absent".
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
