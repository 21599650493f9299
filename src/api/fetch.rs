//! Concurrent bundle assembly.
//!
//! The five collections are requested in parallel on scoped threads. A
//! collection that fails to load contributes an empty list and a
//! [`FetchFailure`]; the rest of the bundle is still usable.

use std::thread;

use serde_json::Value;

use super::client::{ApiResponse, CivicApi, Statistics};
use crate::error::{CivicAuditError, Result};
use crate::model::{Bundle, CollectionKind};

/// A collection that could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub collection: CollectionKind,
    pub message: String,
}

/// The assembled bundle together with any collections that failed.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub bundle: Bundle,
    pub failures: Vec<FetchFailure>,
}

impl FetchOutcome {
    /// True when every collection loaded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

fn fetch_collection(
    api: &dyn CivicApi,
    kind: CollectionKind,
    include_drafts: bool,
) -> ApiResponse<Vec<Value>> {
    match kind {
        CollectionKind::Politicians => api.fetch_politicians(include_drafts),
        CollectionKind::Commitments => api.fetch_commitments(),
        CollectionKind::TimelineEvents => api.fetch_timeline_events(),
        CollectionKind::Documents => api.fetch_documents(),
        CollectionKind::VotingRecords => api.fetch_voting_records(),
    }
}

/// Fetch all five collections concurrently and assemble a bundle.
///
/// Never fails as a whole. Collections are merged in bundle order, so the
/// result does not depend on which request finishes first.
pub fn fetch_bundle(api: &dyn CivicApi, include_drafts: bool) -> FetchOutcome {
    let responses: Vec<(CollectionKind, ApiResponse<Vec<Value>>)> = thread::scope(|s| {
        let handles: Vec<_> = CollectionKind::ALL
            .iter()
            .map(|&kind| {
                (
                    kind,
                    s.spawn(move || fetch_collection(api, kind, include_drafts)),
                )
            })
            .collect();

        handles
            .into_iter()
            .map(|(kind, handle)| {
                let response = handle
                    .join()
                    .unwrap_or_else(|_| ApiResponse::failure("fetch thread panicked"));
                (kind, response)
            })
            .collect()
    });

    let mut outcome = FetchOutcome::default();
    for (kind, response) in responses {
        match response.into_result() {
            Ok(items) => {
                tracing::debug!("Fetched {} {}", items.len(), kind);
                outcome.bundle.push_raw(kind, items);
            }
            Err(message) => {
                tracing::warn!("Failed to fetch {}: {}", kind, message);
                outcome.failures.push(FetchFailure {
                    collection: kind,
                    message,
                });
            }
        }
    }

    tracing::info!(
        "Fetched bundle with {} collection failure(s)",
        outcome.failures.len()
    );
    outcome
}

/// Fetch aggregate statistics, turning a failed response into an error.
pub fn fetch_statistics(api: &dyn CivicApi) -> Result<Statistics> {
    api.fetch_statistics()
        .into_result()
        .map_err(|message| CivicAuditError::Api {
            endpoint: "statistics".to_string(),
            message,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct StubApi {
        fail_documents: bool,
        panic_commitments: bool,
        saw_drafts: AtomicBool,
    }

    impl CivicApi for StubApi {
        fn fetch_politicians(&self, include_drafts: bool) -> ApiResponse<Vec<Value>> {
            self.saw_drafts.store(include_drafts, Ordering::SeqCst);
            ApiResponse::ok(vec![
                json!({ "id": 1, "name": "Ada Lovelace" }),
                json!({ "id": 2, "name": "Alan Turing" }),
            ])
        }

        fn fetch_commitments(&self) -> ApiResponse<Vec<Value>> {
            if self.panic_commitments {
                panic!("boom");
            }
            ApiResponse::ok(vec![json!({ "id": "c1", "politician_id": 1 })])
        }

        fn fetch_timeline_events(&self) -> ApiResponse<Vec<Value>> {
            ApiResponse::ok(vec![])
        }

        fn fetch_documents(&self) -> ApiResponse<Vec<Value>> {
            if self.fail_documents {
                ApiResponse::failure("connection reset")
            } else {
                ApiResponse::ok(vec![json!({ "id": "d1", "politician_id": 2 })])
            }
        }

        fn fetch_voting_records(&self) -> ApiResponse<Vec<Value>> {
            ApiResponse::ok(vec![json!({ "id": "v1", "politician_id": 1 })])
        }

        fn fetch_statistics(&self) -> ApiResponse<Statistics> {
            ApiResponse::failure("statistics disabled")
        }
    }

    #[test]
    fn assembles_all_collections() {
        let api = StubApi::default();

        let outcome = fetch_bundle(&api, false);

        assert!(outcome.is_complete());
        assert_eq!(outcome.bundle.politicians.len(), 2);
        assert_eq!(outcome.bundle.commitments.len(), 1);
        assert_eq!(outcome.bundle.documents.len(), 1);
        assert_eq!(outcome.bundle.voting_records.len(), 1);
        assert!(outcome.bundle.timeline_events.is_empty());
    }

    #[test]
    fn passes_include_drafts_through() {
        let api = StubApi::default();

        fetch_bundle(&api, true);

        assert!(api.saw_drafts.load(Ordering::SeqCst));
    }

    #[test]
    fn failed_collection_is_empty_and_reported() {
        let api = StubApi {
            fail_documents: true,
            ..Default::default()
        };

        let outcome = fetch_bundle(&api, false);

        assert!(outcome.bundle.documents.is_empty());
        assert_eq!(outcome.bundle.politicians.len(), 2);
        assert_eq!(
            outcome.failures,
            vec![FetchFailure {
                collection: CollectionKind::Documents,
                message: "connection reset".to_string(),
            }]
        );
    }

    #[test]
    fn panicking_fetch_is_a_failure() {
        let api = StubApi {
            panic_commitments: true,
            ..Default::default()
        };

        let outcome = fetch_bundle(&api, false);

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].collection, CollectionKind::Commitments);
        assert!(outcome.bundle.commitments.is_empty());
    }

    #[test]
    fn statistics_failure_is_an_api_error() {
        let err = fetch_statistics(&StubApi::default()).unwrap_err();

        assert!(err.to_string().contains("statistics disabled"));
    }
}
