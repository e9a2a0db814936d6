// crates/folio-config/src/lib.rs
// ============================================================================
// Module: Folio Config Library
// Description: Canonical configuration model, loading, and validation.
// Purpose: Single source of truth for Folio configuration semantics.
// Dependencies: folio-core, folio-store-http, serde, toml
// ============================================================================

//! ## Overview
//! This crate owns the `folio.toml` model: supported locales, the optional
//! remote connection descriptor, relation names, and logging defaults. The
//! remote store counts as configured only when both its address and read key
//! are present; otherwise every consumer stays on the static path.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::CONFIG_ENV_VAR;
pub use config::ConfigError;
pub use config::FolioConfig;
pub use config::LocalesConfig;
pub use config::LoggingConfig;
pub use config::REMOTE_READ_KEY_ENV_VAR;
pub use config::REMOTE_URL_ENV_VAR;
pub use config::RemoteConfig;
pub use config::TablesConfig;
