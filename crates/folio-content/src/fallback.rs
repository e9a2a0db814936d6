// crates/folio-content/src/fallback.rs
// ============================================================================
// Module: Folio Read-Through Fallback
// Description: Shared remote-then-baseline control flow.
// Purpose: Make every resolution call infallible with one helper.
// Dependencies: folio-core, folio-config, thiserror, tracing
// ============================================================================

//! ## Overview
//! [`ResolutionContext::read_through`] runs a remote attempt and substitutes
//! a baseline value when the store is unconfigured, the attempt fails, or it
//! yields nothing usable. Each call logs its outcome and reports exactly one
//! [`ResolutionEvent`] to the configured observer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::Instant;

use folio_config::TablesConfig;
use folio_core::EntityKind;
use folio_core::FallbackReason;
use folio_core::LocaleSet;
use folio_core::NoopObserver;
use folio_core::Operation;
use folio_core::Origin;
use folio_core::RemoteStore;
use folio_core::ResolutionEvent;
use folio_core::ResolutionObserver;
use folio_core::StoreError;
use serde::Serialize;
use thiserror::Error;

use crate::baseline::StaticBaseline;
use crate::rows::RowError;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Why a remote attempt could not be used.
#[derive(Debug, Error)]
pub enum RemoteReadError {
    /// The store call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// A returned row could not be mapped.
    #[error("row mapping failed: {0}")]
    Row(#[from] RowError),
}

/// A resolved value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved<T> {
    /// Resolved value.
    pub value: T,
    /// Source that served it.
    pub origin: Origin,
}

impl<T> Resolved<T> {
    /// Discards the origin.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Everything a resolution call reads from.
///
/// # Invariants
/// - `baseline` covers every locale in `locales`.
pub struct ResolutionContext {
    /// Supported locales.
    pub(crate) locales: LocaleSet,
    /// Compiled-in fallback data.
    pub(crate) baseline: StaticBaseline,
    /// Optional remote store; `None` means static-only.
    pub(crate) store: Option<Arc<dyn RemoteStore>>,
    /// Resolution event sink.
    pub(crate) observer: Arc<dyn ResolutionObserver>,
    /// Remote relation names.
    pub(crate) tables: TablesConfig,
}

impl ResolutionContext {
    /// Creates a static-only context.
    #[must_use]
    pub fn new(locales: LocaleSet, baseline: StaticBaseline, tables: TablesConfig) -> Self {
        Self {
            locales,
            baseline,
            store: None,
            observer: Arc::new(NoopObserver),
            tables,
        }
    }

    /// Returns the supported locales.
    #[must_use]
    pub const fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    /// Returns the static baseline.
    #[must_use]
    pub const fn baseline(&self) -> &StaticBaseline {
        &self.baseline
    }

    /// Returns the relation names.
    #[must_use]
    pub const fn tables(&self) -> &TablesConfig {
        &self.tables
    }

    /// Returns true when a remote store is attached.
    #[must_use]
    pub const fn has_remote(&self) -> bool {
        self.store.is_some()
    }

    /// Attempts `remote`, substituting `fallback()` on any miss.
    ///
    /// `remote` returns `Ok(None)` when the store answered but had nothing
    /// usable; that counts as [`FallbackReason::RemoteEmpty`].
    pub fn read_through<T, R, F>(&self, operation: Operation, remote: R, fallback: F) -> Resolved<T>
    where
        R: FnOnce(&dyn RemoteStore) -> Result<Option<T>, RemoteReadError>,
        F: FnOnce() -> T,
    {
        let started = Instant::now();
        let entity = operation.entity().map(EntityKind::as_str);
        let resolved = match self.store.as_deref() {
            None => {
                tracing::debug!(
                    operation = operation.as_str(),
                    entity,
                    "remote store unconfigured; serving baseline"
                );
                from_baseline(fallback(), FallbackReason::Unconfigured)
            }
            Some(store) => match remote(store) {
                Ok(Some(value)) => {
                    tracing::debug!(operation = operation.as_str(), entity, "served from remote");
                    Resolved {
                        value,
                        origin: Origin::Remote,
                    }
                }
                Ok(None) => {
                    tracing::debug!(
                        operation = operation.as_str(),
                        entity,
                        "remote returned nothing; serving baseline"
                    );
                    from_baseline(fallback(), FallbackReason::RemoteEmpty)
                }
                Err(err) => {
                    tracing::warn!(
                        operation = operation.as_str(),
                        entity,
                        error = %err,
                        "remote read failed; serving baseline"
                    );
                    from_baseline(fallback(), FallbackReason::RemoteFailed)
                }
            },
        };
        self.observer.record(&ResolutionEvent {
            operation,
            origin: resolved.origin,
            elapsed: started.elapsed(),
        });
        resolved
    }
}

/// Wraps a baseline value.
const fn from_baseline<T>(value: T, reason: FallbackReason) -> Resolved<T> {
    Resolved {
        value,
        origin: Origin::Baseline(reason),
    }
}
