// crates/folio-content/src/slug.rs
// ============================================================================
// Module: Folio Slug Resolution
// Description: Locale to slug-column mapping and lookup order.
// Purpose: Decide which column a public slug is matched against, and in what order.
// Dependencies: folio-core
// ============================================================================

//! ## Overview
//! The default locale's public slug is the canonical `slug` column; every
//! other locale has its own `slug_<suffix>` column. A lookup first matches the
//! locale's column and, when that is not the canonical column, retries on the
//! canonical column so entities without a locale override stay reachable.
//! The first exact match wins; cross-column collisions are not detected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use folio_core::Locale;
use folio_core::LocaleSet;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Canonical slug column shared by every entity relation.
pub const CANONICAL_SLUG_COLUMN: &str = "slug";

// ============================================================================
// SECTION: Slug Resolver
// ============================================================================

/// Maps locales to slug columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugResolver {
    /// Supported locales.
    locales: LocaleSet,
}

impl SlugResolver {
    /// Creates a resolver for `locales`.
    #[must_use]
    pub const fn new(locales: LocaleSet) -> Self {
        Self {
            locales,
        }
    }

    /// Returns the slug column for a locale.
    ///
    /// Unsupported locales resolve like the default locale.
    #[must_use]
    pub fn resolve_column(&self, locale: &Locale) -> String {
        let locale = self.locales.effective(locale);
        if self.locales.is_default(locale) {
            CANONICAL_SLUG_COLUMN.to_string()
        } else {
            locale.column(CANONICAL_SLUG_COLUMN)
        }
    }

    /// Returns the columns to try, in order, when matching a public slug.
    #[must_use]
    pub fn lookup_order(&self, locale: &Locale) -> Vec<String> {
        let column = self.resolve_column(locale);
        if column == CANONICAL_SLUG_COLUMN {
            vec![column]
        } else {
            vec![column, CANONICAL_SLUG_COLUMN.to_string()]
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
