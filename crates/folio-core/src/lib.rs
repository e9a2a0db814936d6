// crates/folio-core/src/lib.rs
// ============================================================================
// Module: Folio Core Library
// Description: Public API surface for the Folio content model.
// Purpose: Expose locale, message tree, entity types, and store interfaces.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Folio core defines the content model shared by every resolution component:
//! locales, nested message trees, flat translation rows, and the bilingual
//! article and project entities. It also defines the read-only
//! [`RemoteStore`] interface that optional backing stores implement, and the
//! [`ResolutionObserver`] hook used to report where content was resolved from.
//! The crate performs no I/O.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::FallbackReason;
pub use interfaces::Filter;
pub use interfaces::NoopObserver;
pub use interfaces::Operation;
pub use interfaces::OrderBy;
pub use interfaces::Origin;
pub use interfaces::Record;
pub use interfaces::RemoteStore;
pub use interfaces::ResolutionEvent;
pub use interfaces::ResolutionObserver;
pub use interfaces::SelectQuery;
pub use interfaces::StoreError;
pub use runtime::InMemoryRemoteStore;
