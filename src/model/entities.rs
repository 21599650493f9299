//! Entity record types.
//!
//! Every field is optional or a list that defaults to empty, and every
//! field decodes leniently (see [`lenient`](super::lenient)), so any JSON
//! object becomes a record the checks can inspect. Field aliases cover the
//! camelCase spelling the API uses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::{cited, one_or_many, Citation, EntityId};
use super::lenient;

/// A politician profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Politician {
    pub id: Option<EntityId>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub party: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub position: Option<String>,
    /// Citations backing education claims.
    #[serde(alias = "educationSources", deserialize_with = "one_or_many")]
    #[schemars(with = "Vec<Citation>")]
    pub education_sources: Vec<Citation>,
    /// Citations backing achievement claims.
    #[serde(alias = "achievementSources", deserialize_with = "one_or_many")]
    #[schemars(with = "Vec<Citation>")]
    pub achievement_sources: Vec<Citation>,
    /// Citations backing the claimed position.
    #[serde(alias = "positionSources", deserialize_with = "one_or_many")]
    #[schemars(with = "Vec<Citation>")]
    pub position_sources: Vec<Citation>,
    #[serde(alias = "imageUrl", alias = "image_url", deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(
        alias = "isDraft",
        alias = "draft",
        deserialize_with = "lenient::flag_or_false"
    )]
    pub is_draft: bool,
}

impl Politician {
    /// Name used in messages: the trimmed name, falling back to the id.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => describe_id(self.id.as_ref()),
        }
    }

    /// Claim categories with no usable citation.
    pub fn claims_without_sources(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if cited(&self.education_sources) == 0 {
            missing.push("education");
        }
        if cited(&self.achievement_sources) == 0 {
            missing.push("achievements");
        }
        if cited(&self.position_sources) == 0 {
            missing.push("position");
        }
        missing
    }
}

/// A public commitment made by a politician.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Commitment {
    pub id: Option<EntityId>,
    #[serde(alias = "politicianId")]
    pub politician_id: Option<EntityId>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(alias = "citations", alias = "source", deserialize_with = "one_or_many")]
    #[schemars(with = "Vec<Citation>")]
    pub sources: Vec<Citation>,
}

/// A dated event on a politician's timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TimelineEvent {
    pub id: Option<EntityId>,
    #[serde(alias = "politicianId")]
    pub politician_id: Option<EntityId>,
    #[serde(deserialize_with = "lenient::raw_text")]
    pub date: Option<String>,
    #[serde(alias = "title", deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

/// A supporting document attached to a politician.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Document {
    pub id: Option<EntityId>,
    #[serde(alias = "politicianId")]
    pub politician_id: Option<EntityId>,
    #[serde(alias = "isVerified", deserialize_with = "lenient::flag")]
    pub verified: Option<bool>,
    #[serde(alias = "sourceUrl", alias = "url", deserialize_with = "lenient::text")]
    pub source: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
}

impl Document {
    /// Only an explicit `true` counts as verified.
    pub fn is_verified(&self) -> bool {
        self.verified == Some(true)
    }
}

/// A recorded vote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VotingRecord {
    pub id: Option<EntityId>,
    #[serde(alias = "politicianId")]
    pub politician_id: Option<EntityId>,
    #[serde(deserialize_with = "lenient::text")]
    pub vote: Option<String>,
    #[serde(deserialize_with = "lenient::raw_text")]
    pub date: Option<String>,
    #[serde(alias = "billName", deserialize_with = "lenient::text")]
    pub bill: Option<String>,
}

/// Render an optional id for messages.
pub fn describe_id(id: Option<&EntityId>) -> String {
    match id {
        Some(id) if !id.as_str().is_empty() => id.to_string(),
        _ => "<no id>".to_string(),
    }
}
