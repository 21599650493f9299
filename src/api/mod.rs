//! Access to the civic-data backend.
//!
//! - [`CivicApi`] - the operations the backend exposes
//! - [`HttpApiClient`] - blocking HTTP implementation
//! - [`fetch_bundle`] - concurrent assembly of a [`Bundle`](crate::model::Bundle)

pub mod client;
pub mod fetch;

pub use client::{ApiResponse, AuthHeader, CivicApi, HttpApiClient, Statistics};
pub use fetch::{fetch_bundle, fetch_statistics, FetchFailure, FetchOutcome};
