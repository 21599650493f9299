//! The entity bundle handed to the integrity engine.
//!
//! A [`Bundle`] is a read-only snapshot of the five entity collections.
//! Records are decoded one at a time and field by field: a wrong-typed field
//! never drops its record, so the checks that read the other fields still
//! see it. Only an element that is not a JSON object at all is kept aside
//! as a [`MalformedRecord`].

use std::fmt;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::entities::{Commitment, Document, Politician, TimelineEvent, VotingRecord};
use crate::error::{CivicAuditError, Result};

/// The five entity collections a bundle carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Politicians,
    Commitments,
    TimelineEvents,
    Documents,
    VotingRecords,
}

impl CollectionKind {
    /// All collections, in bundle order.
    pub const ALL: [CollectionKind; 5] = [
        CollectionKind::Politicians,
        CollectionKind::Commitments,
        CollectionKind::TimelineEvents,
        CollectionKind::Documents,
        CollectionKind::VotingRecords,
    ];

    /// Key used in bundle JSON.
    pub fn key(&self) -> &'static str {
        match self {
            CollectionKind::Politicians => "politicians",
            CollectionKind::Commitments => "commitments",
            CollectionKind::TimelineEvents => "timeline_events",
            CollectionKind::Documents => "documents",
            CollectionKind::VotingRecords => "voting_records",
        }
    }

    /// camelCase spelling accepted as an alternative key.
    fn alias(&self) -> Option<&'static str> {
        match self {
            CollectionKind::TimelineEvents => Some("timelineEvents"),
            CollectionKind::VotingRecords => Some("votingRecords"),
            _ => None,
        }
    }

    /// Singular entity name used in messages.
    pub fn entity_name(&self) -> &'static str {
        match self {
            CollectionKind::Politicians => "Politician",
            CollectionKind::Commitments => "Commitment",
            CollectionKind::TimelineEvents => "Timeline event",
            CollectionKind::Documents => "Document",
            CollectionKind::VotingRecords => "Voting record",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A collection element that could not be decoded into its record type.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedRecord {
    /// Collection the element came from.
    pub kind: CollectionKind,
    /// Zero-based position within the collection as received.
    pub index: usize,
    /// Decoder message.
    pub reason: String,
}

/// Read-only snapshot of all entity collections for one engine run.
#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct Bundle {
    pub politicians: Vec<Politician>,
    pub commitments: Vec<Commitment>,
    pub timeline_events: Vec<TimelineEvent>,
    pub documents: Vec<Document>,
    pub voting_records: Vec<VotingRecord>,
    /// Elements that failed to decode, in collection then index order.
    #[schemars(skip)]
    pub malformed: Vec<MalformedRecord>,
}

impl Bundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse bundle JSON text.
    ///
    /// # Errors
    ///
    /// Returns `BundleShape` if the text is not JSON, the top-level value is
    /// not an object, or a collection is present but not an array.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| CivicAuditError::BundleShape {
                message: format!("not valid JSON: {}", e),
            })?;
        Self::from_value(value)
    }

    /// Build a bundle from a JSON object holding the collections.
    ///
    /// Missing or `null` collections are treated as empty.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(CivicAuditError::BundleShape {
                    message: format!("expected an object, found {}", json_type(&other)),
                });
            }
        };

        let mut bundle = Bundle::new();
        for kind in CollectionKind::ALL {
            let entry = map
                .remove(kind.key())
                .or_else(|| kind.alias().and_then(|alias| map.remove(alias)));

            match entry {
                None | Some(Value::Null) => {}
                Some(Value::Array(items)) => bundle.push_raw(kind, items),
                Some(other) => {
                    return Err(CivicAuditError::BundleShape {
                        message: format!(
                            "'{}' must be an array, found {}",
                            kind.key(),
                            json_type(&other)
                        ),
                    });
                }
            }
        }

        Ok(bundle)
    }

    /// Decode raw collection elements and append them.
    ///
    /// Elements that fail to decode are recorded in [`Bundle::malformed`].
    pub fn push_raw(&mut self, kind: CollectionKind, items: Vec<Value>) {
        match kind {
            CollectionKind::Politicians => {
                decode_into(kind, items, &mut self.politicians, &mut self.malformed)
            }
            CollectionKind::Commitments => {
                decode_into(kind, items, &mut self.commitments, &mut self.malformed)
            }
            CollectionKind::TimelineEvents => {
                decode_into(kind, items, &mut self.timeline_events, &mut self.malformed)
            }
            CollectionKind::Documents => {
                decode_into(kind, items, &mut self.documents, &mut self.malformed)
            }
            CollectionKind::VotingRecords => {
                decode_into(kind, items, &mut self.voting_records, &mut self.malformed)
            }
        }
    }

    /// Number of decoded records in a collection.
    pub fn len_of(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Politicians => self.politicians.len(),
            CollectionKind::Commitments => self.commitments.len(),
            CollectionKind::TimelineEvents => self.timeline_events.len(),
            CollectionKind::Documents => self.documents.len(),
            CollectionKind::VotingRecords => self.voting_records.len(),
        }
    }

    /// Whether the bundle holds no records at all, decoded or not.
    pub fn is_empty(&self) -> bool {
        self.malformed.is_empty() && CollectionKind::ALL.iter().all(|k| self.len_of(*k) == 0)
    }
}

fn decode_into<T: DeserializeOwned>(
    kind: CollectionKind,
    items: Vec<Value>,
    out: &mut Vec<T>,
    malformed: &mut Vec<MalformedRecord>,
) {
    for (index, item) in items.into_iter().enumerate() {
        let decoded = if item.is_object() {
            serde_json::from_value::<T>(item).map_err(|e| e.to_string())
        } else {
            Err(format!("expected an object, found {}", json_type(&item)))
        };

        match decoded {
            Ok(record) => out.push(record),
            Err(reason) => {
                tracing::debug!("Malformed {} record at index {}: {}", kind, index, reason);
                malformed.push(MalformedRecord {
                    kind,
                    index,
                    reason,
                });
            }
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
