//! Identifier and citation value types.
//!
//! The upstream API is loose about both: identifiers arrive as strings or
//! numbers, and citations as bare URLs or `{ url, title }` objects. These
//! types normalize both shapes so the checks can compare them directly.

use std::borrow::Cow;
use std::fmt;

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier of an entity, normalized to its string form.
///
/// `1` and `"1"` deserialize to the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Create a new id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Self(s.trim().to_string()),
            Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => Self(i.to_string()),
                (_, Some(u), _) => Self(u.to_string()),
                (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => {
                    Self((f as i64).to_string())
                }
                _ => Self(n.to_string()),
            },
            // Any other shape is kept as JSON text so a reference to it
            // still fails to resolve instead of disappearing.
            other => Self(other.to_string()),
        })
    }
}

impl JsonSchema for EntityId {
    fn schema_name() -> Cow<'static, str> {
        "EntityId".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": ["string", "integer"],
            "description": "Entity identifier; numbers are compared by their decimal form"
        })
    }
}

/// A source citation backing a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    /// Where the source can be found.
    pub url: String,
    /// Optional human-readable title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Citation {
    /// Create a citation with only a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
        }
    }

    /// A citation with an empty or whitespace-only URL does not count as a source.
    pub fn is_blank(&self) -> bool {
        self.url.trim().is_empty()
    }
}

impl<'de> Deserialize<'de> for Citation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Object {
            #[serde(default, alias = "link", alias = "href")]
            url: String,
            #[serde(default)]
            title: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Url(String),
            Object(Object),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Url(url) => Citation::new(url),
            Repr::Object(obj) => Citation {
                url: obj.url,
                title: obj.title,
            },
        })
    }
}

impl JsonSchema for Citation {
    fn schema_name() -> Cow<'static, str> {
        "Citation".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "string", "description": "Source URL" },
                {
                    "type": "object",
                    "properties": {
                        "url": { "type": "string" },
                        "title": { "type": "string" }
                    }
                }
            ]
        })
    }
}

/// Accepts `null`, a single citation, or a list of citations.
///
/// Entries that are not citations are dropped, so a commitment whose only
/// "source" is `5` counts as uncited.
pub(crate) fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Citation>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().filter_map(citation).collect(),
        single => citation(single).into_iter().collect(),
    })
}

fn citation(value: Value) -> Option<Citation> {
    match serde_json::from_value(value) {
        Ok(citation) => Some(citation),
        Err(e) => {
            tracing::debug!("Ignoring unreadable citation: {}", e);
            None
        }
    }
}

/// Count the citations that actually point somewhere.
pub fn cited(citations: &[Citation]) -> usize {
    citations.iter().filter(|c| !c.is_blank()).count()
}
