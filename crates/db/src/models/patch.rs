//! Presence-aware deserialization support for partial-update DTOs.
//!
//! A plain `Option<T>` cannot distinguish a field that was omitted from one
//! that was explicitly set to `null`. Update DTOs wrap nullable columns in
//! `Option<Option<T>>` and deserialize them with [`double_option`]:
//!
//! - field omitted        -> `None` (via `#[serde(default)]`)
//! - field set to `null`  -> `Some(None)`
//! - field set to a value -> `Some(Some(value))`

use serde::{Deserialize, Deserializer};

/// Deserializer for `Option<Option<T>>` fields.
///
/// Must be combined with `#[serde(default)]` so an omitted field stays
/// `None`; any present value (including `null`) is wrapped in `Some`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::double_option")]
        note: Option<Option<String>>,
    }

    #[test]
    fn omitted_field_is_none() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert!(patch.note.is_none());
    }

    #[test]
    fn explicit_null_is_some_none() {
        let patch: Patch = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(patch.note, Some(None));
    }

    #[test]
    fn value_is_some_some() {
        let patch: Patch = serde_json::from_str(r#"{"note": "hi"}"#).unwrap();
        assert_eq!(patch.note, Some(Some("hi".to_string())));
    }
}
