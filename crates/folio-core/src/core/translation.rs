// crates/folio-core/src/core/translation.rs
// ============================================================================
// Module: Folio Translation Rows
// Description: Flat translation override records.
// Purpose: Model `(namespace, key, value per locale)` rows and their key paths.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`TranslationRow`] is one flat override record. Its key path is the
//! namespace alone when the key is [`ROOT_KEY`], else `namespace.key`. The
//! pair `(namespace, key)` is the row's identity.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::locale::Locale;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Key sentinel meaning "this namespace has no sub-key".
pub const ROOT_KEY: &str = "_root";

// ============================================================================
// SECTION: Translation Row
// ============================================================================

/// Flat translation override record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRow {
    /// Top-level namespace (`nav`, `hero`).
    pub namespace: String,
    /// Sub-key within the namespace, or [`ROOT_KEY`].
    pub key: String,
    /// Stored values keyed by locale; absent locales have no override.
    #[serde(default)]
    pub values: BTreeMap<Locale, String>,
}

impl TranslationRow {
    /// Creates a row with no values.
    #[must_use]
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
            values: BTreeMap::new(),
        }
    }

    /// Adds a value for a locale.
    #[must_use]
    pub fn with_value(mut self, locale: Locale, value: impl Into<String>) -> Self {
        self.values.insert(locale, value.into());
        self
    }

    /// Returns true when the row addresses the namespace root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.key == ROOT_KEY
    }

    /// Returns the dotted key path.
    #[must_use]
    pub fn key_path(&self) -> String {
        if self.is_root() {
            self.namespace.clone()
        } else {
            format!("{}.{}", self.namespace, self.key)
        }
    }

    /// Returns the non-empty segments of the key path.
    ///
    /// A row with a blank namespace or key has no address and yields no
    /// segments; use [`ROOT_KEY`] to address a namespace root.
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        if self.namespace.trim().is_empty() || self.key.trim().is_empty() {
            return Vec::new();
        }
        let key = if self.is_root() { "" } else { self.key.as_str() };
        self.namespace.split('.').chain(key.split('.')).filter(|segment| !segment.is_empty()).collect()
    }

    /// Returns the stored value for a locale.
    #[must_use]
    pub fn value_for(&self, locale: &Locale) -> Option<&str> {
        self.values.get(locale).map(String::as_str)
    }
}
