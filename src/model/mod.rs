//! Domain records consumed by the integrity engine.
//!
//! - [`entities`] - Politician, commitment, timeline event, document and voting record
//! - [`bundle`] - The snapshot of all collections passed into one engine run
//! - [`ids`] - Identifier and citation value types

pub mod bundle;
pub mod entities;
pub mod ids;
mod lenient;

pub use bundle::{Bundle, CollectionKind, MalformedRecord};
pub use entities::{
    describe_id, Commitment, Document, Politician, TimelineEvent, VotingRecord,
};
pub use ids::{Citation, EntityId};
