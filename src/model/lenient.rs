//! Field decoders that never reject a record.
//!
//! A single wrong-typed field must not hide the rest of its record from the
//! checks. Fields a check only displays fall back to "absent"; fields a
//! check judges keep their raw JSON text so that check can flag them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A string, or `None` for null and any other type.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => {
            tracing::debug!("Ignoring non-text field value {}", other);
            None
        }
    })
}

/// A string, with non-string values kept as their JSON text.
///
/// Used for dates: `20991231` reaches the date check as `"20991231"` and is
/// reported as an invalid date there.
pub(crate) fn raw_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    })
}

/// A boolean, or `None` for anything that is not one.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::Null => None,
        other => {
            tracing::debug!("Ignoring non-boolean flag value {}", other);
            None
        }
    })
}

/// Like [`flag`], defaulting to `false`.
pub(crate) fn flag_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flag(deserializer)?.unwrap_or(false))
}
