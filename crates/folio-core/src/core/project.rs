// crates/folio-core/src/core/project.rs
// ============================================================================
// Module: Folio Projects
// Description: Project entity, per-locale copy, and highlight figures.
// Purpose: Provide the domain shape shared by baseline and remote project paths.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`Project`] mirrors [`crate::Article`]'s identity model and adds a
//! short ordered list of [`Highlight`] figures (`"40%"` with a per-locale
//! label) that storage keeps as one embedded structured column.

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

/// A headline figure shown on a project page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Display value (`"40%"`, `"3x"`).
    pub value: String,
    /// Label keyed by locale.
    #[serde(default)]
    pub label: BTreeMap<Locale, String>,
}

/// Narrative copy of a project for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCopy {
    /// Project title.
    pub title: String,
    /// Short description used in listings.
    #[serde(default)]
    pub summary: String,
    /// Case-study paragraphs.
    #[serde(default)]
    pub body: Vec<String>,
}

/// Portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Canonical slug.
    pub slug: String,
    /// Slug overrides for non-default locales.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub locale_slugs: BTreeMap<Locale, String>,
    /// Delivery year.
    #[serde(default)]
    pub year: Option<u16>,
    /// Category label.
    #[serde(default)]
    pub category: Option<String>,
    /// Technology stack.
    #[serde(default)]
    pub stack: Vec<String>,
    /// Cover image path or URL.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Public deployment URL.
    #[serde(default)]
    pub live_url: Option<String>,
    /// Source repository URL.
    #[serde(default)]
    pub repo_url: Option<String>,
    /// Headline figures in display order.
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    /// Copy keyed by locale.
    pub copy: BTreeMap<Locale, ProjectCopy>,
}

impl ContentEntity for Project {
    const KIND: EntityKind = EntityKind::Project;

    type Copy = ProjectCopy;

    fn slug(&self) -> &str {
        &self.slug
    }

    fn locale_slugs(&self) -> &BTreeMap<Locale, String> {
        &self.locale_slugs
    }

    fn copies(&self) -> &BTreeMap<Locale, ProjectCopy> {
        &self.copy
    }
}
