// crates/folio-content/src/lib.rs
// ============================================================================
// Module: Folio Content Resolution
// Description: Read-through content resolution over an optional remote store.
// Purpose: Resolve messages, articles, and projects without ever failing a render.
// Dependencies: folio-core, folio-config, folio-store-http, serde_json, tracing
// ============================================================================

//! ## Overview
//! This crate resolves UI message trees and slug-addressed content entities.
//! Every public resolution call attempts the remote store first and falls
//! back to the compiled-in [`StaticBaseline`] when the store is unconfigured,
//! unreachable, returns an error, or has nothing usable. Resolution calls
//! return values, never errors; the only fallible step is constructing a
//! [`ContentResolver`], which parses and validates the baseline.
//!
//! ## Invariants
//! - The static baseline is validated once, at construction.
//! - Each call to `build`, `build_report`, `list_all`, `get_by_slug`, or
//!   `list_slugs_for_locale` emits exactly one
//!   [`folio_core::ResolutionEvent`]. `adjacent` and `list_slug_params` are
//!   built on those and emit one event per primitive call they make.
//! - A remote collection is returned only when every row maps cleanly.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod baseline;
pub mod fallback;
pub mod messages;
pub mod repository;
pub mod resolver;
pub mod rows;
pub mod slug;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use baseline::BaselineError;
pub use baseline::StaticBaseline;
pub use fallback::RemoteReadError;
pub use fallback::ResolutionContext;
pub use fallback::Resolved;
pub use messages::MessageBuild;
pub use messages::MessageTreeBuilder;
pub use repository::EntityRepository;
pub use repository::EntitySchema;
pub use repository::SlugParam;
pub use resolver::ContentResolver;
pub use resolver::ResolverInitError;
pub use rows::RowError;
pub use slug::CANONICAL_SLUG_COLUMN;
pub use slug::SlugResolver;
