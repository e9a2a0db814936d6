// crates/folio-content/tests/fallback_totality.rs
// ============================================================================
// Module: Fallback Totality Tests
// Description: Tests that every operation resolves without a working store.
// Purpose: Validate baseline equivalence and observer reporting.
// Dependencies: folio-content, folio-core
// ============================================================================

//! ## Overview
//! Runs every public resolution operation with no store and with a failing
//! store, and checks results against the compiled baseline.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use std::sync::Arc;

use folio_content::ContentResolver;
use folio_core::EntityKind;
use folio_core::FallbackReason;
use folio_core::Operation;
use folio_core::Origin;

use crate::common::FailingStore;
use crate::common::RecordingObserver;
use crate::common::en_default;
use crate::common::locale;
use crate::common::remote_resolver;
use crate::common::static_resolver;

/// Asserts every operation returns exactly the baseline.
fn assert_matches_baseline(resolver: &ContentResolver) {
    let baseline = resolver.context().baseline();
    for code in ["en", "ro"] {
        let tree = resolver.messages().build(&locale(code));
        assert_eq!(&tree, baseline.messages(&locale(code)).unwrap());
    }
    assert_eq!(resolver.articles().list_all(), baseline.articles());
    assert_eq!(resolver.projects().list_all(), baseline.projects());
    for article in baseline.articles() {
        assert_eq!(resolver.articles().get_by_slug(&article.slug, None).as_ref(), Some(article));
    }
    let canonical: Vec<String> = baseline.projects().iter().map(|project| project.slug.clone()).collect();
    assert_eq!(resolver.projects().list_slugs_for_locale(&locale("ro")), canonical);
}

/// Tests that an unconfigured resolver serves the baseline exactly.
#[test]
fn unconfigured_resolver_serves_baseline() {
    let resolver = static_resolver(en_default());
    assert!(!resolver.context().has_remote());
    assert_matches_baseline(&resolver);
}

/// Tests that a failing store serves the baseline exactly.
#[test]
fn failing_store_serves_baseline() {
    let store = Arc::new(FailingStore::default());
    let resolver = remote_resolver(en_default(), store);
    assert!(resolver.context().has_remote());
    assert_matches_baseline(&resolver);
}

/// Tests that every call reports one event with its origin.
#[test]
fn observer_sees_one_event_per_call() {
    let observer = Arc::new(RecordingObserver::default());
    let resolver = static_resolver(en_default()).with_observer(observer.clone());
    let _ = resolver.messages().build(&locale("en"));
    let _ = resolver.articles().list_all();
    let _ = resolver.projects().get_by_slug("open-ledger", None);
    let _ = resolver.projects().list_slug_params();

    let events = observer.events();
    let operations: Vec<Operation> = events.iter().map(|event| event.operation).collect();
    assert_eq!(
        operations,
        vec![
            Operation::BuildMessages,
            Operation::ListAll(EntityKind::Article),
            Operation::GetBySlug(EntityKind::Project),
            Operation::ListSlugs(EntityKind::Project),
            Operation::ListSlugs(EntityKind::Project),
        ]
    );
    assert!(
        events.iter().all(|event| event.origin == Origin::Baseline(FallbackReason::Unconfigured))
    );
}

/// Tests that composite calls emit one event per primitive they run.
#[test]
fn composite_calls_emit_one_event_per_primitive() {
    let observer = Arc::new(RecordingObserver::default());
    let resolver = static_resolver(en_default()).with_observer(observer.clone());
    let _ = resolver.projects().adjacent("atlas-logistics");
    assert_eq!(observer.events().len(), 1);
    let _ = resolver.articles().list_slug_params();
    let operations: Vec<Operation> =
        observer.events().iter().skip(1).map(|event| event.operation).collect();
    assert_eq!(
        operations,
        vec![Operation::ListSlugs(EntityKind::Article), Operation::ListSlugs(EntityKind::Article)]
    );
}

/// Tests that a failing store is attempted once per call.
#[test]
fn failing_store_attempted_once_per_call() {
    let store = Arc::new(FailingStore::default());
    let observer = Arc::new(RecordingObserver::default());
    let resolver = remote_resolver(en_default(), store.clone()).with_observer(observer.clone());
    let _ = resolver.articles().list_all();
    let _ = resolver.projects().list_slugs_for_locale(&locale("en"));
    assert_eq!(store.calls.load(std::sync::atomic::Ordering::SeqCst), 2);
    assert!(
        observer
            .events()
            .iter()
            .all(|event| event.origin == Origin::Baseline(FallbackReason::RemoteFailed))
    );
}
