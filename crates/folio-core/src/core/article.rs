// crates/folio-core/src/core/article.rs
// ============================================================================
// Module: Folio Articles
// Description: Article entity and its per-locale copy.
// Purpose: Provide the domain shape shared by baseline and remote article paths.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! An [`Article`] carries locale-neutral metadata plus an independent
//! [`ArticleCopy`] per locale; body paragraph counts may differ per locale.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::entity::ContentEntity;
use crate::core::entity::EntityKind;
use crate::core::locale::Locale;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Narrative copy of an article for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleCopy {
    /// Headline.
    pub title: String,
    /// Listing excerpt.
    #[serde(default)]
    pub excerpt: String,
    /// Body paragraphs.
    #[serde(default)]
    pub body: Vec<String>,
}

/// Blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Canonical slug.
    pub slug: String,
    /// Slug overrides for non-default locales.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub locale_slugs: BTreeMap<Locale, String>,
    /// Publication date (ISO 8601 calendar date).
    pub published_on: String,
    /// Estimated reading time in minutes.
    #[serde(default)]
    pub read_minutes: Option<u32>,
    /// Topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cover image path or URL.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Copy keyed by locale.
    pub copy: BTreeMap<Locale, ArticleCopy>,
}

impl ContentEntity for Article {
    const KIND: EntityKind = EntityKind::Article;

    type Copy = ArticleCopy;

    fn slug(&self) -> &str {
        &self.slug
    }

    fn locale_slugs(&self) -> &BTreeMap<Locale, String> {
        &self.locale_slugs
    }

    fn copies(&self) -> &BTreeMap<Locale, ArticleCopy> {
        &self.copy
    }
}
