// crates/folio-content/src/baseline.rs
// ============================================================================
// Module: Folio Static Baseline
// Description: Compiled-in messages, articles, and projects.
// Purpose: Provide the always-available fallback dataset.
// Dependencies: folio-core, serde_json
// ============================================================================

//! ## Overview
//! The baseline is embedded at build time from `baseline/` and parsed once.
//! It holds one nested message tree per supported locale and the two entity
//! collections in their fixed declared order. Baseline entities carry no
//! locale slug overrides.
//!
//! ## Invariants
//! - Every supported locale has a message tree.
//! - Every entity has a non-empty, unique canonical slug and copy for the
//!   default locale.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use folio_core::Article;
use folio_core::ContentEntity;
use folio_core::Locale;
use folio_core::LocaleSet;
use folio_core::MessageTree;
use folio_core::Project;
use serde::de::DeserializeOwned;
use thiserror::Error;

// ============================================================================
// SECTION: Embedded Assets
// ============================================================================

/// Embedded message trees keyed by locale code.
const MESSAGE_SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../baseline/messages/en.json")),
    ("ro", include_str!("../baseline/messages/ro.json")),
];

/// Embedded article collection.
const ARTICLE_SOURCE: &str = include_str!("../baseline/articles.json");

/// Embedded project collection.
const PROJECT_SOURCE: &str = include_str!("../baseline/projects.json");

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Static baseline errors. Any of these is fatal at startup.
#[derive(Debug, Error)]
pub enum BaselineError {
    /// An asset failed to parse.
    #[error("baseline asset {asset} is malformed: {message}")]
    Parse {
        /// Asset name.
        asset: String,
        /// Parser message.
        message: String,
    },
    /// A supported locale has no message tree.
    #[error("baseline has no message tree for locale {0}")]
    MissingLocale(String),
    /// The baseline violates a structural invariant.
    #[error("invalid baseline: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Static Baseline
// ============================================================================

/// Immutable compiled-in content.
#[derive(Debug, Clone)]
pub struct StaticBaseline {
    /// Message trees keyed by locale.
    messages: BTreeMap<Locale, MessageTree>,
    /// Articles in declared order.
    articles: Vec<Article>,
    /// Projects in declared order.
    projects: Vec<Project>,
}

impl StaticBaseline {
    /// Parses and validates the embedded baseline for `locales`.
    ///
    /// # Errors
    ///
    /// Returns [`BaselineError`] when an asset is malformed or the baseline
    /// does not cover `locales`.
    pub fn compiled(locales: &LocaleSet) -> Result<Self, BaselineError> {
        Self::from_sources(locales, MESSAGE_SOURCES, ARTICLE_SOURCE, PROJECT_SOURCE)
    }

    /// Parses and validates a baseline from JSON sources.
    ///
    /// Message sources for locales outside `locales` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BaselineError`] when a source is malformed or the baseline
    /// does not cover `locales`.
    pub fn from_sources(
        locales: &LocaleSet,
        messages: &[(&str, &str)],
        articles: &str,
        projects: &str,
    ) -> Result<Self, BaselineError> {
        let mut trees = BTreeMap::new();
        for (code, source) in messages {
            let asset = format!("messages/{code}.json");
            let locale = Locale::parse(code).map_err(|err| BaselineError::Parse {
                asset: asset.clone(),
                message: err.to_string(),
            })?;
            if !locales.contains(&locale) {
                continue;
            }
            trees.insert(locale, parse_asset::<MessageTree>(&asset, source)?);
        }
        let articles = parse_asset::<Vec<Article>>("articles.json", articles)?;
        let projects = parse_asset::<Vec<Project>>("projects.json", projects)?;
        Self::from_parts(locales, trees, articles, projects)
    }

    /// Validates an already-parsed baseline.
    ///
    /// # Errors
    ///
    /// Returns [`BaselineError`] when the parts violate baseline invariants.
    pub fn from_parts(
        locales: &LocaleSet,
        messages: BTreeMap<Locale, MessageTree>,
        articles: Vec<Article>,
        projects: Vec<Project>,
    ) -> Result<Self, BaselineError> {
        for locale in locales.iter() {
            if !messages.contains_key(locale) {
                return Err(BaselineError::MissingLocale(locale.to_string()));
            }
        }
        validate_collection(locales, "articles", &articles)?;
        validate_collection(locales, "projects", &projects)?;
        Ok(Self {
            messages,
            articles,
            projects,
        })
    }

    /// Returns the message tree for a locale.
    #[must_use]
    pub fn messages(&self, locale: &Locale) -> Option<&MessageTree> {
        self.messages.get(locale)
    }

    /// Returns articles in declared order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Returns projects in declared order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses one JSON asset.
fn parse_asset<T: DeserializeOwned>(asset: &str, source: &str) -> Result<T, BaselineError> {
    serde_json::from_str(source).map_err(|err| BaselineError::Parse {
        asset: asset.to_string(),
        message: err.to_string(),
    })
}

/// Checks slug presence, slug uniqueness, and default-locale copy.
fn validate_collection<E: ContentEntity>(
    locales: &LocaleSet,
    label: &str,
    entities: &[E],
) -> Result<(), BaselineError> {
    let mut seen = BTreeSet::new();
    for entity in entities {
        let slug = entity.slug();
        if slug.trim().is_empty() {
            return Err(BaselineError::Invalid(format!("{label}: empty canonical slug")));
        }
        if !seen.insert(slug) {
            return Err(BaselineError::Invalid(format!("{label}: duplicate slug {slug}")));
        }
        if !entity.copies().contains_key(locales.default_locale()) {
            return Err(BaselineError::Invalid(format!(
                "{label}: {slug} lacks {} copy",
                locales.default_locale()
            )));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
