// crates/folio-store-http/src/http.rs
// ============================================================================
// Module: Folio HTTP Remote Store
// Description: Blocking HTTP client for REST collection reads.
// Purpose: Execute bounded, read-only selections against the remote store.
// Dependencies: folio-core, reqwest, serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! [`HttpRemoteStore`] issues one GET per selection with the read key in the
//! `apikey` and `Authorization` headers. Non-success statuses, oversized or
//! truncated bodies, and bodies that are not a JSON array of objects all map
//! to [`StoreError`] so callers can fall back.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::io::Read;
use std::time::Duration;
use std::time::Instant;

use folio_core::Record;
use folio_core::RemoteStore;
use folio_core::SelectQuery;
use folio_core::StoreError;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::header::AUTHORIZATION;
use reqwest::redirect::Policy;
use serde::Deserialize;
use serde_json::Value;

use crate::query::build_select_url;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Default REST path prefix appended to the base URL.
pub const DEFAULT_REST_PATH: &str = "/rest/v1";

/// Configuration for the HTTP remote store.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpStoreConfig {
    /// Base URL of the store (`https://project.example.co`).
    pub base_url: String,
    /// Public read key sent with every request.
    pub read_key: String,
    /// Path prefix for table collections.
    pub rest_path: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
    /// Allow cleartext HTTP (disabled by default).
    pub allow_http: bool,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for HttpStoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            read_key: String::new(),
            rest_path: DEFAULT_REST_PATH.to_string(),
            timeout_ms: 5_000,
            max_response_bytes: 4 * 1024 * 1024,
            allow_http: false,
            user_agent: concat!("folio/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl fmt::Debug for HttpStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpStoreConfig")
            .field("base_url", &self.base_url)
            .field("read_key", &"<redacted>")
            .field("rest_path", &self.rest_path)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_response_bytes", &self.max_response_bytes)
            .field("allow_http", &self.allow_http)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl HttpStoreConfig {
    /// Resolves the collection endpoint (`base_url` joined with `rest_path`).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] when the base URL is malformed, carries a
    /// query or fragment, or uses a scheme the configuration does not allow.
    pub fn endpoint(&self) -> Result<Url, StoreError> {
        let mut url = Url::parse(self.base_url.trim())
            .map_err(|err| StoreError::Query(format!("invalid base url: {err}")))?;
        match url.scheme() {
            "https" => {}
            "http" if self.allow_http => {}
            other => {
                return Err(StoreError::Query(format!("unsupported url scheme: {other}")));
            }
        }
        if url.host_str().is_none() {
            return Err(StoreError::Query("base url host required".to_string()));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(StoreError::Query(
                "base url must not carry a query or fragment".to_string(),
            ));
        }
        let path = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            self.rest_path.trim_matches('/')
        );
        url.set_path(path.trim_end_matches('/'));
        Ok(url)
    }
}

// ============================================================================
// SECTION: Store Implementation
// ============================================================================

/// Remote store backed by a REST collection endpoint.
pub struct HttpRemoteStore {
    /// Collection endpoint; table names are appended as path segments.
    endpoint: Url,
    /// Public read key.
    read_key: String,
    /// Maximum response size allowed, in bytes.
    max_response_bytes: usize,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl HttpRemoteStore {
    /// Creates a new HTTP remote store with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the endpoint is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: &HttpStoreConfig) -> Result<Self, StoreError> {
        let endpoint = config.endpoint()?;
        if config.read_key.trim().is_empty() {
            return Err(StoreError::Query("read key must be non-empty".to_string()));
        }
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()
            .map_err(|_| StoreError::Transport("http client build failed".to_string()))?;
        Ok(Self {
            endpoint,
            read_key: config.read_key.trim().to_string(),
            max_response_bytes: config.max_response_bytes,
            client,
        })
    }

    /// Returns the collection endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl RemoteStore for HttpRemoteStore {
    fn select(&self, query: &SelectQuery) -> Result<Vec<Record>, StoreError> {
        let url = build_select_url(&self.endpoint, query)?;
        let started = Instant::now();
        let mut response = self
            .client
            .get(url)
            .header("apikey", &self.read_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.read_key))
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|err| {
                if err.is_timeout() {
                    StoreError::Transport("http request timed out".to_string())
                } else {
                    StoreError::Transport("http request failed".to_string())
                }
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }
        let body = read_response_limited(&mut response, self.max_response_bytes)?;
        let rows = decode_rows(&body)?;
        tracing::debug!(
            table = %query.table,
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "remote select completed"
        );
        Ok(rows)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Decodes a response body that must be a JSON array of objects.
fn decode_rows(body: &[u8]) -> Result<Vec<Record>, StoreError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| StoreError::Decode(format!("invalid json: {err}")))?;
    let Value::Array(items) = value else {
        return Err(StoreError::Decode("expected a json array of rows".to_string()));
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(row) => Ok(row),
            _ => Err(StoreError::Decode("row must be a json object".to_string())),
        })
        .collect()
}

/// Reads the response body while enforcing a byte limit.
fn read_response_limited(
    response: &mut reqwest::blocking::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, StoreError> {
    let expected_len = response.content_length();
    let max_bytes_u64 = u64::try_from(max_bytes)
        .map_err(|_| StoreError::Limit("response size limit exceeds u64".to_string()))?;
    if let Some(expected) = expected_len
        && expected > max_bytes_u64
    {
        return Err(StoreError::Limit(format!("response of {expected} bytes exceeds {max_bytes}")));
    }
    let mut buf = Vec::new();
    let limit = max_bytes_u64.saturating_add(1);
    let mut handle = response.take(limit);
    handle
        .read_to_end(&mut buf)
        .map_err(|_| StoreError::Transport("failed to read response".to_string()))?;
    if buf.len() > max_bytes {
        return Err(StoreError::Limit(format!("response exceeds {max_bytes} bytes")));
    }
    if let Some(expected) = expected_len {
        let expected = usize::try_from(expected)
            .map_err(|_| StoreError::Decode("invalid response length".to_string()))?;
        if buf.len() < expected {
            return Err(StoreError::Transport("http response truncated".to_string()));
        }
    }
    Ok(buf)
}
