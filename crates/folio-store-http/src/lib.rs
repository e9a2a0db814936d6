// crates/folio-store-http/src/lib.rs
// ============================================================================
// Module: Folio HTTP Store
// Description: PostgREST-compatible remote store over blocking HTTP.
// Purpose: Provide the production RemoteStore backend for content resolution.
// Dependencies: folio-core, reqwest, serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! This crate implements [`folio_core::RemoteStore`] against a REST endpoint
//! that exposes tables as collections (`GET /rest/v1/<table>?select=...`).
//! Requests are bounded by a timeout and a response size limit, redirects are
//! disabled, and cleartext HTTP is refused unless explicitly allowed. Only
//! read access is ever attempted; the configured key is a public read key.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod http;
pub mod query;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use http::HttpRemoteStore;
pub use http::HttpStoreConfig;
pub use query::build_select_url;
