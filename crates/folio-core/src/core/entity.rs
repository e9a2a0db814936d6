// crates/folio-core/src/core/entity.rs
// ============================================================================
// Module: Folio Content Entities
// Description: Shared behavior for slug-addressed content entities.
// Purpose: Define canonical and per-locale slug semantics once for all entities.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Articles and projects share one identity model: an immutable canonical
//! slug that doubles as the default locale's public slug, plus optional
//! per-locale slug overrides for every non-default locale. Narrative copy is
//! held per locale so each locale can diverge independently.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::locale::Locale;
use crate::core::locale::LocaleSet;

// ============================================================================
// SECTION: Entity Kind
// ============================================================================

/// Content entity classification.
///
/// # Invariants
/// - Variants are stable for logging and observer labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Blog article.
    Article,
    /// Portfolio project.
    Project,
}

impl EntityKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Project => "project",
        }
    }
}

// ============================================================================
// SECTION: Content Entity
// ============================================================================

/// Slug-addressed content entity with per-locale copy.
pub trait ContentEntity: Clone + Send + Sync {
    /// Entity classification.
    const KIND: EntityKind;

    /// Per-locale narrative copy type.
    type Copy;

    /// Canonical slug.
    fn slug(&self) -> &str;

    /// Locale slug overrides for non-default locales.
    fn locale_slugs(&self) -> &BTreeMap<Locale, String>;

    /// Narrative copy keyed by locale.
    fn copies(&self) -> &BTreeMap<Locale, Self::Copy>;

    /// Returns the non-empty slug override for a locale.
    fn locale_slug(&self, locale: &Locale) -> Option<&str> {
        self.locale_slugs()
            .get(locale)
            .map(String::as_str)
            .filter(|slug| !slug.is_empty())
    }

    /// Returns the public slug for a locale: the override if set, else canonical.
    fn public_slug<'a>(&'a self, locales: &LocaleSet, locale: &Locale) -> &'a str {
        if locales.is_default(locale) {
            return self.slug();
        }
        self.locale_slug(locale).unwrap_or_else(|| self.slug())
    }

    /// Returns the public slug for every supported locale.
    fn alternate_slugs(&self, locales: &LocaleSet) -> BTreeMap<Locale, String> {
        locales
            .iter()
            .map(|locale| (locale.clone(), self.public_slug(locales, locale).to_string()))
            .collect()
    }

    /// Returns the copy for a locale, falling back to the default locale's copy.
    fn copy_for<'a>(&'a self, locale: &Locale, locales: &LocaleSet) -> Option<&'a Self::Copy> {
        self.copies().get(locale).or_else(|| self.copies().get(locales.default_locale()))
    }
}

/// Neighbors of an entity in listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjacent<T> {
    /// Entity listed immediately before.
    pub previous: Option<T>,
    /// Entity listed immediately after.
    pub next: Option<T>,
}

impl<T> Adjacent<T> {
    /// Returns an empty neighbor pair.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            previous: None,
            next: None,
        }
    }
}
