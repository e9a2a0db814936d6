// crates/folio-core/src/interfaces/mod.rs
// ============================================================================
// Module: Folio Interfaces
// Description: Backend-agnostic interfaces for remote reads and observability.
// Purpose: Define the contract surfaces used by the content resolution layer.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! [`RemoteStore`] is the single read-only seam to an optional tabular store.
//! It speaks in [`SelectQuery`] values and returns untyped [`Record`]s; typed
//! mapping is the caller's job. [`ResolutionObserver`] receives one
//! [`ResolutionEvent`] per public resolution call describing where the value
//! came from.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::core::entity::EntityKind;

// ============================================================================
// SECTION: Queries
// ============================================================================

/// A single untyped row as returned by the remote store.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Exact-match filter on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Column name.
    pub column: String,
    /// Value the column must equal.
    pub value: String,
}

/// Ordering term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Column name.
    pub column: String,
    /// Ascending when true.
    pub ascending: bool,
}

/// Read-only selection against one relation.
///
/// # Invariants
/// - An empty `columns` list selects every column.
/// - Filters are conjunctive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    /// Relation name.
    pub table: String,
    /// Projected columns.
    pub columns: Vec<String>,
    /// Exact-match filters.
    pub filters: Vec<Filter>,
    /// Ordering terms, applied in order.
    pub order: Vec<OrderBy>,
    /// Maximum rows to return.
    pub limit: Option<usize>,
}

impl SelectQuery {
    /// Starts a query selecting every column of `table`.
    #[must_use]
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    /// Projects the given columns.
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an exact-match filter.
    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// Adds an ascending ordering term.
    #[must_use]
    pub fn order_asc(mut self, column: impl Into<String>) -> Self {
        self.order.push(OrderBy {
            column: column.into(),
            ascending: true,
        });
        self
    }

    /// Caps the number of returned rows.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

// ============================================================================
// SECTION: Remote Store
// ============================================================================

/// Remote store errors.
///
/// Every variant is absorbed by the resolution layer and routed to the
/// static fallback; none reaches page-rendering callers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network failure, including timeouts.
    #[error("remote transport error: {0}")]
    Transport(String),
    /// Non-success HTTP status.
    #[error("remote returned status {0}")]
    Status(u16),
    /// Response body could not be decoded.
    #[error("remote response decode error: {0}")]
    Decode(String),
    /// Response exceeded a configured limit.
    #[error("remote response limit exceeded: {0}")]
    Limit(String),
    /// The query itself was rejected before sending.
    #[error("invalid remote query: {0}")]
    Query(String),
}

/// Read-only tabular store.
pub trait RemoteStore: Send + Sync {
    /// Executes a selection and returns matching rows in store order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, decode, or limit failures.
    fn select(&self, query: &SelectQuery) -> Result<Vec<Record>, StoreError>;
}

// ============================================================================
// SECTION: Observability
// ============================================================================

/// Public resolution operation classification.
///
/// # Invariants
/// - Variants are stable for logging and observer labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "operation", content = "entity")]
pub enum Operation {
    /// Message tree build for one locale.
    BuildMessages,
    /// Entity collection listing.
    ListAll(EntityKind),
    /// Single entity lookup by slug.
    GetBySlug(EntityKind),
    /// Slug enumeration for one locale.
    ListSlugs(EntityKind),
}

impl Operation {
    /// Returns a stable label for the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BuildMessages => "build_messages",
            Self::ListAll(_) => "list_all",
            Self::GetBySlug(_) => "get_by_slug",
            Self::ListSlugs(_) => "list_slugs",
        }
    }

    /// Returns the entity kind when the operation targets entities.
    #[must_use]
    pub const fn entity(self) -> Option<EntityKind> {
        match self {
            Self::BuildMessages => None,
            Self::ListAll(kind) | Self::GetBySlug(kind) | Self::ListSlugs(kind) => Some(kind),
        }
    }
}

/// Why the static baseline served a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No remote store is configured.
    Unconfigured,
    /// The remote attempt failed (transport, status, decode, or mapping).
    RemoteFailed,
    /// The remote attempt succeeded but yielded nothing usable.
    RemoteEmpty,
}

impl FallbackReason {
    /// Returns a stable label for the reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unconfigured => "unconfigured",
            Self::RemoteFailed => "remote_failed",
            Self::RemoteEmpty => "remote_empty",
        }
    }
}

/// Source that served a resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "source", content = "reason")]
pub enum Origin {
    /// The remote store.
    Remote,
    /// The compiled-in baseline.
    Baseline(FallbackReason),
}

impl Origin {
    /// Returns true when the remote store served the call.
    #[must_use]
    pub const fn is_remote(self) -> bool {
        matches!(self, Self::Remote)
    }
}

/// One completed resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionEvent {
    /// Operation performed.
    pub operation: Operation,
    /// Source that served it.
    pub origin: Origin,
    /// Wall time spent, including the remote attempt.
    pub elapsed: Duration,
}

/// Sink for resolution events.
pub trait ResolutionObserver: Send + Sync {
    /// Records a completed resolution call.
    fn record(&self, event: &ResolutionEvent);
}

/// No-op observer.
///
/// # Invariants
/// - Events are intentionally discarded.
pub struct NoopObserver;

impl ResolutionObserver for NoopObserver {
    fn record(&self, _event: &ResolutionEvent) {}
}
