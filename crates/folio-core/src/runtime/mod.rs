// crates/folio-core/src/runtime/mod.rs
// ============================================================================
// Module: Folio Runtime Helpers
// Description: Reference implementations of core interfaces.
// Purpose: Provide dependency-free implementations for tests and local demos.
// Dependencies: crate::interfaces
// ============================================================================

//! ## Overview
//! Runtime helpers implement core interfaces without network access.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod memory_store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use memory_store::InMemoryRemoteStore;
