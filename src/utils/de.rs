//! Lenient field deserializers for documents written by other tools.

use crate::models::movie::DEFAULT_EMOJI;
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Treat an explicit `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Emoji field: `null` or an empty string becomes [`DEFAULT_EMOJI`].
pub fn emoji_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let emoji = Option::<String>::deserialize(deserializer)?;
    Ok(match emoji {
        Some(e) if !e.is_empty() => e,
        _ => DEFAULT_EMOJI.to_string(),
    })
}

/// Parse a setting with its `FromStr` impl, falling back to the default for
/// unknown or non-string values so one bad field does not reset the rest.
pub fn setting_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(T::default()),
        serde_json::Value::String(s) => Ok(s.parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring setting value '{}': {}", s, e);
            T::default()
        })),
        other => {
            tracing::warn!("Ignoring setting value {}", other);
            Ok(T::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "null_as_default")]
        count: i32,
        #[serde(default = "default_emoji", deserialize_with = "emoji_or_default")]
        emoji: String,
    }

    fn default_emoji() -> String {
        DEFAULT_EMOJI.to_string()
    }

    #[test]
    fn test_null_fields_fall_back() {
        let doc: Doc = serde_json::from_str(r#"{"count": null, "emoji": null}"#).unwrap();
        assert_eq!(doc.count, 0);
        assert_eq!(doc.emoji, DEFAULT_EMOJI);
    }

    #[test]
    fn test_present_fields_are_kept() {
        let doc: Doc = serde_json::from_str(r#"{"count": 3, "emoji": "🦈"}"#).unwrap();
        assert_eq!(doc.count, 3);
        assert_eq!(doc.emoji, "🦈");
    }

    #[test]
    fn test_wrong_type_is_still_an_error() {
        assert!(serde_json::from_str::<Doc>(r#"{"count": "three"}"#).is_err());
    }
}
