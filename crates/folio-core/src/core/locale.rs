// crates/folio-core/src/core/locale.rs
// ============================================================================
// Module: Folio Locales
// Description: Locale identifiers and the closed set of supported locales.
// Purpose: Normalize locale codes and derive per-locale storage column names.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A [`Locale`] is a normalized short code (`en`, `ro`, `pt-br`). A
//! [`LocaleSet`] is the closed set a deployment supports, with exactly one
//! default locale. Nothing in the resolution layer assumes the set has two
//! members: per-locale columns are derived from [`Locale::column_suffix`].
//!
//! ## Invariants
//! - Locale codes are lowercase, use `-` as the region separator, and match
//!   `[a-z]{2,3}(-[a-z0-9]{2,8})?`.
//! - A locale set is non-empty, duplicate-free, and contains its default.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Locale parsing and locale-set construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The locale code is malformed.
    #[error("invalid locale code: {0}")]
    Invalid(String),
    /// The supported set is empty.
    #[error("locale set must contain at least one locale")]
    Empty,
    /// The supported set lists a locale twice.
    #[error("duplicate locale in set: {0}")]
    Duplicate(String),
    /// The default locale is not part of the supported set.
    #[error("default locale {0} is not in the supported set")]
    DefaultNotSupported(String),
}

// ============================================================================
// SECTION: Locale
// ============================================================================

/// Normalized locale code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parses and normalizes a locale code.
    ///
    /// Input is trimmed, lowercased, and `_` is accepted as a region separator.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Invalid`] when the code is malformed.
    pub fn parse(value: &str) -> Result<Self, LocaleError> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        let mut parts = normalized.split('-');
        let language = parts.next().unwrap_or_default();
        let region = parts.next();
        if parts.next().is_some() {
            return Err(LocaleError::Invalid(value.to_string()));
        }
        let language_ok =
            (2..=3).contains(&language.len()) && language.bytes().all(|b| b.is_ascii_lowercase());
        let region_ok = region.is_none_or(|region| {
            (2..=8).contains(&region.len())
                && region.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        });
        if !language_ok || !region_ok {
            return Err(LocaleError::Invalid(value.to_string()));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the suffix used for per-locale storage columns (`pt-br` → `pt_br`).
    #[must_use]
    pub fn column_suffix(&self) -> String {
        self.0.replace('-', "_")
    }

    /// Returns the per-locale column name for a field (`title` → `title_ro`).
    #[must_use]
    pub fn column(&self, field: &str) -> String {
        format!("{field}_{}", self.column_suffix())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Locale {
    type Error = LocaleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.0
    }
}

// ============================================================================
// SECTION: Locale Set
// ============================================================================

/// Closed set of supported locales with a designated default.
///
/// # Invariants
/// - `supported` is non-empty, duplicate-free, and contains `default`.
/// - Iteration order is the declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    /// Default locale used as the merge and fallback base.
    default: Locale,
    /// Supported locales in declared order.
    supported: Vec<Locale>,
}

impl LocaleSet {
    /// Builds a locale set.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] when the set is empty, has duplicates, or does not
    /// contain the default locale.
    pub fn new(default: Locale, supported: Vec<Locale>) -> Result<Self, LocaleError> {
        if supported.is_empty() {
            return Err(LocaleError::Empty);
        }
        for (index, locale) in supported.iter().enumerate() {
            if supported[..index].contains(locale) {
                return Err(LocaleError::Duplicate(locale.to_string()));
            }
        }
        if !supported.contains(&default) {
            return Err(LocaleError::DefaultNotSupported(default.to_string()));
        }
        Ok(Self {
            default,
            supported,
        })
    }

    /// Parses a locale set from raw codes.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] when any code is malformed or the set is invalid.
    pub fn parse<S: AsRef<str>>(default: &str, supported: &[S]) -> Result<Self, LocaleError> {
        let default = Locale::parse(default)?;
        let supported = supported
            .iter()
            .map(|code| Locale::parse(code.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(default, supported)
    }

    /// Returns the default locale.
    #[must_use]
    pub const fn default_locale(&self) -> &Locale {
        &self.default
    }

    /// Returns true when the locale is the default locale.
    #[must_use]
    pub fn is_default(&self, locale: &Locale) -> bool {
        &self.default == locale
    }

    /// Returns true when the locale is supported.
    #[must_use]
    pub fn contains(&self, locale: &Locale) -> bool {
        self.supported.contains(locale)
    }

    /// Iterates supported locales in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.supported.iter()
    }

    /// Iterates every supported locale except the default.
    pub fn non_default(&self) -> impl Iterator<Item = &Locale> {
        self.supported.iter().filter(move |locale| *locale != &self.default)
    }

    /// Resolves an incoming locale code to a supported locale.
    ///
    /// Returns `None` for malformed or unsupported codes.
    #[must_use]
    pub fn resolve(&self, code: &str) -> Option<Locale> {
        Locale::parse(code).ok().filter(|locale| self.contains(locale))
    }

    /// Returns the locale itself when supported, else the default locale.
    #[must_use]
    pub fn effective<'a>(&'a self, locale: &'a Locale) -> &'a Locale {
        if self.contains(locale) { locale } else { &self.default }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
