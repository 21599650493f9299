//! REST API client.
//!
//! [`CivicApi`] is the seam between the auditor and the backend that owns
//! the data. [`HttpApiClient`] implements it over blocking HTTP. Every call
//! returns an [`ApiResponse`]: transport failures, HTTP errors and
//! undecodable bodies all come back as a failed response carrying a message,
//! so callers decide how to degrade.

use std::time::Duration;

use anyhow::{bail, Context};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope every endpoint responds with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, alias = "message")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// A failed response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Collapse into the payload or the error message.
    pub fn into_result(self) -> std::result::Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("response contained no data".to_string()),
            (false, _) => Err(self.error.unwrap_or_else(|| "request failed".to_string())),
        }
    }
}

/// Aggregate entity counts reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub politicians: u64,
    pub commitments: u64,
    #[serde(alias = "timelineEvents")]
    pub timeline_events: u64,
    pub documents: u64,
    #[serde(alias = "votingRecords")]
    pub voting_records: u64,
}

/// Operations the backend exposes to the auditor.
///
/// Collection payloads are raw JSON values so records can be decoded one
/// at a time by [`Bundle::push_raw`](crate::model::Bundle::push_raw).
pub trait CivicApi: Send + Sync {
    /// Fetch politicians, optionally including unpublished drafts.
    fn fetch_politicians(&self, include_drafts: bool) -> ApiResponse<Vec<Value>>;

    /// Fetch commitments.
    fn fetch_commitments(&self) -> ApiResponse<Vec<Value>>;

    /// Fetch timeline events.
    fn fetch_timeline_events(&self) -> ApiResponse<Vec<Value>>;

    /// Fetch documents.
    fn fetch_documents(&self) -> ApiResponse<Vec<Value>>;

    /// Fetch voting records.
    fn fetch_voting_records(&self) -> ApiResponse<Vec<Value>>;

    /// Fetch aggregate entity counts.
    fn fetch_statistics(&self) -> ApiResponse<Statistics>;
}

/// Authentication header sent with every request.
#[derive(Debug, Clone)]
pub struct AuthHeader {
    /// Header name (e.g., "Authorization").
    pub header_name: String,
    /// Header value (e.g., "Bearer token123").
    pub header_value: String,
}

impl AuthHeader {
    /// Create a Bearer token auth header.
    pub fn bearer(token: &str) -> Self {
        Self {
            header_name: "Authorization".to_string(),
            header_value: format!("Bearer {}", token),
        }
    }
}

/// [`CivicApi`] over blocking HTTP.
///
/// # Example
///
/// ```no_run
/// use civic_audit::api::{CivicApi, HttpApiClient};
/// use std::time::Duration;
///
/// let client = HttpApiClient::new("https://api.example.org/v1", Duration::from_secs(30)).unwrap();
/// let stats = client.fetch_statistics();
/// ```
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    auth: Option<AuthHeader>,
    timeout: Duration,
}

impl HttpApiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("civic-audit/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth: None,
            timeout,
        })
    }

    /// Send an auth header with every request.
    pub fn with_auth(mut self, auth: AuthHeader) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        match self.request(path) {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Request to {} failed: {:#}", path, e);
                ApiResponse::failure(format!("{:#}", e))
            }
        }
    }

    fn request<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<ApiResponse<T>> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(auth) = &self.auth {
            request = request.header(&auth.header_name, &auth.header_value);
        }

        let response = request
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let detail = serde_json::from_str::<ApiResponse<Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.error);
            match detail {
                Some(detail) => bail!("HTTP {} fetching {}: {}", status, url, detail),
                None => bail!("HTTP {} fetching {}", status, url),
            }
        }

        response
            .json::<ApiResponse<T>>()
            .with_context(|| format!("Failed to decode response from {}", url))
    }
}

impl CivicApi for HttpApiClient {
    fn fetch_politicians(&self, include_drafts: bool) -> ApiResponse<Vec<Value>> {
        self.get(&format!("politicians?includeDrafts={}", include_drafts))
    }

    fn fetch_commitments(&self) -> ApiResponse<Vec<Value>> {
        self.get("commitments")
    }

    fn fetch_timeline_events(&self) -> ApiResponse<Vec<Value>> {
        self.get("timeline-events")
    }

    fn fetch_documents(&self) -> ApiResponse<Vec<Value>> {
        self.get("documents")
    }

    fn fetch_voting_records(&self) -> ApiResponse<Vec<Value>> {
        self.get("voting-records")
    }

    fn fetch_statistics(&self) -> ApiResponse<Statistics> {
        self.get("statistics")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> HttpApiClient {
        HttpApiClient::new(server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn into_result_variants() {
        assert_eq!(ApiResponse::ok(3).into_result(), Ok(3));
        assert_eq!(
            ApiResponse::<i32>::failure("nope").into_result(),
            Err("nope".to_string())
        );

        let empty: ApiResponse<i32> = ApiResponse {
            success: true,
            data: None,
            error: None,
        };
        assert_eq!(
            empty.into_result(),
            Err("response contained no data".to_string())
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = HttpApiClient::new("https://api.example.org/v1/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(client.base_url(), "https://api.example.org/v1");
        assert_eq!(client.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn fetches_politicians_with_drafts_flag() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/politicians")
                .query_param("includeDrafts", "true");
            then.status(200).json_body(json!({
                "success": true,
                "data": [{ "id": 1, "name": "A" }]
            }));
        });

        let response = client_for(&server).fetch_politicians(true);

        mock.assert();
        assert!(response.success);
        assert_eq!(response.data.unwrap().len(), 1);
    }

    #[test]
    fn sends_bearer_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/documents")
                .header("Authorization", "Bearer secret-token");
            then.status(200)
                .json_body(json!({ "success": true, "data": [] }));
        });

        let client = client_for(&server).with_auth(AuthHeader::bearer("secret-token"));
        let response = client.fetch_documents();

        mock.assert();
        assert_eq!(response.into_result(), Ok(vec![]));
    }

    #[test]
    fn http_error_becomes_failed_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/commitments");
            then.status(503)
                .json_body(json!({ "success": false, "error": "maintenance" }));
        });

        let response = client_for(&server).fetch_commitments();

        assert!(!response.success);
        let message = response.error.unwrap();
        assert!(message.contains("503"));
        assert!(message.contains("maintenance"));
    }

    #[test]
    fn undecodable_body_becomes_failed_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/voting-records");
            then.status(200).body("<html>oops</html>");
        });

        let response = client_for(&server).fetch_voting_records();

        assert!(!response.success);
        assert!(response.error.unwrap().contains("Failed to decode"));
    }

    #[test]
    fn envelope_failure_is_passed_through() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/timeline-events");
            then.status(200)
                .json_body(json!({ "success": false, "message": "not allowed" }));
        });

        let response = client_for(&server).fetch_timeline_events();

        assert_eq!(response.into_result(), Err("not allowed".to_string()));
    }

    #[test]
    fn fetches_statistics_with_camel_case_fields() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/statistics");
            then.status(200).json_body(json!({
                "success": true,
                "data": { "politicians": 12, "timelineEvents": 40, "votingRecords": 7 }
            }));
        });

        let stats = client_for(&server).fetch_statistics().into_result().unwrap();

        assert_eq!(stats.politicians, 12);
        assert_eq!(stats.timeline_events, 40);
        assert_eq!(stats.voting_records, 7);
        assert_eq!(stats.documents, 0);
    }
}
