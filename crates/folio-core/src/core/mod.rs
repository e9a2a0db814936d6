// crates/folio-core/src/core/mod.rs
// ============================================================================
// Module: Folio Core Types
// Description: Canonical content model for messages, articles, and projects.
// Purpose: Provide stable, serializable types shared by baseline and remote paths.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Core types define the domain shapes every resolution path returns. The
//! compiled-in baseline deserializes directly into these types, and remote
//! rows are mapped into them, so callers never observe which source served a
//! value.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod article;
pub mod entity;
pub mod locale;
pub mod messages;
pub mod project;
pub mod translation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use article::Article;
pub use article::ArticleCopy;
pub use entity::Adjacent;
pub use entity::ContentEntity;
pub use entity::EntityKind;
pub use locale::Locale;
pub use locale::LocaleError;
pub use locale::LocaleSet;
pub use messages::ConflictKind;
pub use messages::MessageNode;
pub use messages::MessageTree;
pub use messages::PathConflict;
pub use messages::decode_stored_value;
pub use messages::deep_merge;
pub use project::Highlight;
pub use project::Project;
pub use project::ProjectCopy;
pub use translation::ROOT_KEY;
pub use translation::TranslationRow;
