// crates/folio-content/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: Shared resolvers, stores, and observers for content tests.
// Purpose: Provide deterministic remote stores and event capture.
// Dependencies: folio-content, folio-core, folio-config
// ============================================================================

//! ## Overview
//! Fixtures build resolvers over the compiled baseline or a small custom
//! baseline, backed by the in-memory store, a store that always fails, or no
//! store at all. A recording observer captures resolution events.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]
#![allow(clippy::unwrap_used, reason = "Test-only unwraps are permitted.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use folio_config::TablesConfig;
use folio_content::ContentResolver;
use folio_content::StaticBaseline;
use folio_core::InMemoryRemoteStore;
use folio_core::Locale;
use folio_core::LocaleSet;
use folio_core::MessageTree;
use folio_core::Record;
use folio_core::RemoteStore;
use folio_core::ResolutionEvent;
use folio_core::ResolutionObserver;
use folio_core::SelectQuery;
use folio_core::StoreError;
use serde_json::Value;

// ============================================================================
// SECTION: Locales
// ============================================================================

/// Parses a locale code.
pub fn locale(code: &str) -> Locale {
    Locale::parse(code).unwrap()
}

/// English-default bilingual locale set.
pub fn en_default() -> LocaleSet {
    LocaleSet::parse("en", &["en", "ro"]).unwrap()
}

/// Romanian-default bilingual locale set.
pub fn ro_default() -> LocaleSet {
    LocaleSet::parse("ro", &["ro", "en"]).unwrap()
}

// ============================================================================
// SECTION: Resolvers
// ============================================================================

/// Static-only resolver over the compiled baseline.
pub fn static_resolver(locales: LocaleSet) -> ContentResolver {
    let baseline = StaticBaseline::compiled(&locales).unwrap();
    ContentResolver::new(locales, baseline, TablesConfig::default())
}

/// Resolver over the compiled baseline backed by `store`.
pub fn remote_resolver(locales: LocaleSet, store: Arc<dyn RemoteStore>) -> ContentResolver {
    static_resolver(locales).with_store(store)
}

/// Builds a baseline with custom message trees and the compiled entities.
pub fn baseline_with_messages(locales: &LocaleSet, trees: &[(&str, Value)]) -> StaticBaseline {
    let compiled = StaticBaseline::compiled(locales).unwrap();
    let mut messages = BTreeMap::new();
    for (code, tree) in trees {
        let tree: MessageTree = serde_json::from_value(tree.clone()).unwrap();
        messages.insert(locale(code), tree);
    }
    StaticBaseline::from_parts(
        locales,
        messages,
        compiled.articles().to_vec(),
        compiled.projects().to_vec(),
    )
    .unwrap()
}

// ============================================================================
// SECTION: Stores
// ============================================================================

/// In-memory store seeded with one table.
pub fn store_with(table: &str, rows: Vec<Value>) -> InMemoryRemoteStore {
    let store = InMemoryRemoteStore::new();
    store.set_table_json(table, rows).unwrap();
    store
}

/// Store that fails every call and counts attempts.
#[derive(Default)]
pub struct FailingStore {
    /// Number of select calls observed.
    pub calls: AtomicUsize,
}

impl RemoteStore for FailingStore {
    fn select(&self, _query: &SelectQuery) -> Result<Vec<Record>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Transport("connection refused".to_string()))
    }
}

/// Store that records every query and delegates to an inner store.
pub struct RecordingStore {
    /// Delegate store.
    pub inner: InMemoryRemoteStore,
    /// Queries seen, in order.
    pub queries: Mutex<Vec<SelectQuery>>,
}

impl RecordingStore {
    /// Wraps `inner`.
    pub fn new(inner: InMemoryRemoteStore) -> Self {
        Self {
            inner,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Returns the queries seen so far.
    pub fn seen(&self) -> Vec<SelectQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl RemoteStore for RecordingStore {
    fn select(&self, query: &SelectQuery) -> Result<Vec<Record>, StoreError> {
        self.queries.lock().unwrap().push(query.clone());
        self.inner.select(query)
    }
}

// ============================================================================
// SECTION: Observers
// ============================================================================

/// Observer that keeps every event.
#[derive(Default)]
pub struct RecordingObserver {
    /// Captured events.
    pub events: Mutex<Vec<ResolutionEvent>>,
}

impl RecordingObserver {
    /// Returns captured events.
    pub fn events(&self) -> Vec<ResolutionEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ResolutionObserver for RecordingObserver {
    fn record(&self, event: &ResolutionEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
