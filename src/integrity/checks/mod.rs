//! Built-in integrity checks.
//!
//! Registration order (see [`CheckRegistry::with_builtins`](super::CheckRegistry::with_builtins))
//! determines the order of issues in a result.

pub mod claim_sources;
pub mod commitment_citations;
pub mod data_coverage;
pub mod date_sanity;
pub mod document_verification;
pub mod duplicate_politicians;
pub mod politician_profile;
pub mod referential_integrity;
pub mod well_formed;

pub use claim_sources::PoliticianClaimSourcesCheck;
pub use commitment_citations::CommitmentCitationsCheck;
pub use data_coverage::DataCoverageCheck;
pub use date_sanity::{parse_date, DateSanityCheck, ParsedDate};
pub use document_verification::DocumentVerificationCheck;
pub use duplicate_politicians::DuplicatePoliticiansCheck;
pub use politician_profile::PoliticianProfileCheck;
pub use referential_integrity::ReferentialIntegrityCheck;
pub use well_formed::WellFormedRecordsCheck;
