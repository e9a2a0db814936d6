// crates/folio-content/src/rows.rs
// ============================================================================
// Module: Folio Row Mapping
// Description: Maps untyped remote rows into domain types.
// Purpose: Normalize storage shapes (per-locale columns, nulls, JSON text).
// Dependencies: folio-core, serde_json, tracing
// ============================================================================

//! ## Overview
//! Remote relations store one column per locale (`title_ro`, `slug_pt_br`)
//! rather than a locale map, and may return structured columns either as
//! native JSON or as JSON-encoded text. The mappers here fold those shapes
//! into [`TranslationRow`], [`Article`], and [`Project`]. `NULL` and empty
//! strings in optional columns become `None`.
//!
//! A [`RowError`] marks a row as unusable; callers treat one bad row as a
//! failed remote attempt so that partially mapped collections are never served.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use folio_core::Article;
use folio_core::ArticleCopy;
use folio_core::Highlight;
use folio_core::Locale;
use folio_core::LocaleSet;
use folio_core::Project;
use folio_core::ProjectCopy;
use folio_core::Record;
use folio_core::TranslationRow;
use serde_json::Value;
use thiserror::Error;

use crate::slug::CANONICAL_SLUG_COLUMN;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Row mapping errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// A required column is missing, null, or empty.
    #[error("row is missing required column {0}")]
    Missing(String),
    /// A column holds a value of the wrong type.
    #[error("column {column} must be {expected}")]
    Type {
        /// Column name.
        column: String,
        /// Expected type description.
        expected: &'static str,
    },
}

// ============================================================================
// SECTION: Column Helpers
// ============================================================================

/// Reads an optional text column; `NULL`, absent, and empty become `None`.
///
/// # Errors
///
/// Returns [`RowError::Type`] when the column holds a non-string value.
pub fn optional_text(record: &Record, column: &str) -> Result<Option<String>, RowError> {
    match record.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(RowError::Type {
            column: column.to_string(),
            expected: "text",
        }),
    }
}

/// Reads a required, non-empty text column.
///
/// # Errors
///
/// Returns [`RowError`] when the column is missing, empty, or not text.
pub fn required_text(record: &Record, column: &str) -> Result<String, RowError> {
    optional_text(record, column)?.ok_or_else(|| RowError::Missing(column.to_string()))
}

/// Reads a list-of-strings column stored natively or as JSON text.
///
/// `NULL`, absent, and empty text yield an empty list.
///
/// # Errors
///
/// Returns [`RowError::Type`] when the column is not a list of strings.
pub fn text_list(record: &Record, column: &str) -> Result<Vec<String>, RowError> {
    let type_error = || RowError::Type {
        column: column.to_string(),
        expected: "a list of strings",
    };
    match record.get(column) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(Vec::new()),
        Some(Value::String(text)) => {
            serde_json::from_str::<Vec<String>>(text).map_err(|_| type_error())
        }
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(type_error))
            .collect(),
        Some(_) => Err(type_error()),
    }
}

/// Reads an optional unsigned integer column.
///
/// # Errors
///
/// Returns [`RowError::Type`] when the column is not an integer in range.
pub fn optional_uint<T: TryFrom<u64>>(record: &Record, column: &str) -> Result<Option<T>, RowError> {
    match record.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|number| T::try_from(number).ok())
            .map(Some)
            .ok_or_else(|| RowError::Type {
                column: column.to_string(),
                expected: "a non-negative integer",
            }),
    }
}

// ============================================================================
// SECTION: Translations
// ============================================================================

/// Maps a translation row, keeping values only for `locales`.
///
/// A `NULL` or absent value column means "no override" for that locale. An
/// empty string is a real override and is kept.
///
/// # Errors
///
/// Returns [`RowError::Type`] when `namespace`, `key`, or a value column is
/// not text. A missing or empty `namespace` or `key` maps to an empty string;
/// such a row has no path segments and is skipped by the message builder.
pub fn translation_from_record(
    record: &Record,
    locales: &[&Locale],
) -> Result<TranslationRow, RowError> {
    let namespace = optional_text(record, "namespace")?.unwrap_or_default();
    let key = optional_text(record, "key")?.unwrap_or_default();
    let mut row = TranslationRow::new(namespace, key);
    for locale in locales {
        let column = locale.column("value");
        match record.get(&column) {
            None | Some(Value::Null) => {}
            Some(Value::String(text)) => {
                row.values.insert((*locale).clone(), text.clone());
            }
            Some(_) => {
                return Err(RowError::Type {
                    column,
                    expected: "text",
                });
            }
        }
    }
    Ok(row)
}

// ============================================================================
// SECTION: Entities
// ============================================================================

/// Collects `slug_<suffix>` overrides for every non-default locale.
fn locale_slugs(record: &Record, locales: &LocaleSet) -> Result<BTreeMap<Locale, String>, RowError> {
    let mut slugs = BTreeMap::new();
    for locale in locales.non_default() {
        if let Some(slug) = optional_text(record, &locale.column(CANONICAL_SLUG_COLUMN))? {
            slugs.insert(locale.clone(), slug);
        }
    }
    Ok(slugs)
}

/// Returns the column names an article selection needs.
#[must_use]
pub fn article_columns(locales: &LocaleSet) -> Vec<String> {
    let mut columns = vec![
        CANONICAL_SLUG_COLUMN.to_string(),
        "published_on".to_string(),
        "read_minutes".to_string(),
        "tags".to_string(),
        "cover_image".to_string(),
    ];
    for locale in locales.non_default() {
        columns.push(locale.column(CANONICAL_SLUG_COLUMN));
    }
    for locale in locales.iter() {
        for field in ["title", "excerpt", "body"] {
            columns.push(locale.column(field));
        }
    }
    columns
}

/// Maps an article row.
///
/// # Errors
///
/// Returns [`RowError`] when the canonical slug or default-locale title is
/// missing, or a column has the wrong type.
pub fn article_from_record(record: &Record, locales: &LocaleSet) -> Result<Article, RowError> {
    let slug = required_text(record, CANONICAL_SLUG_COLUMN)?;
    let mut copy = BTreeMap::new();
    for locale in locales.iter() {
        let title_column = locale.column("title");
        let Some(title) = optional_text(record, &title_column)? else {
            if locales.is_default(locale) {
                return Err(RowError::Missing(title_column));
            }
            continue;
        };
        copy.insert(
            locale.clone(),
            ArticleCopy {
                title,
                excerpt: optional_text(record, &locale.column("excerpt"))?.unwrap_or_default(),
                body: text_list(record, &locale.column("body"))?,
            },
        );
    }
    Ok(Article {
        locale_slugs: locale_slugs(record, locales)?,
        published_on: optional_text(record, "published_on")?.unwrap_or_default(),
        read_minutes: optional_uint(record, "read_minutes")?,
        tags: text_list(record, "tags")?,
        cover_image: optional_text(record, "cover_image")?,
        copy,
        slug,
    })
}

/// Returns the column names a project selection needs.
#[must_use]
pub fn project_columns(locales: &LocaleSet) -> Vec<String> {
    let mut columns = vec![
        CANONICAL_SLUG_COLUMN.to_string(),
        "year".to_string(),
        "category".to_string(),
        "stack".to_string(),
        "cover_image".to_string(),
        "live_url".to_string(),
        "repo_url".to_string(),
        "highlights".to_string(),
    ];
    for locale in locales.non_default() {
        columns.push(locale.column(CANONICAL_SLUG_COLUMN));
    }
    for locale in locales.iter() {
        for field in ["title", "summary", "body"] {
            columns.push(locale.column(field));
        }
    }
    columns
}

/// Maps a project row.
///
/// A malformed `highlights` column is logged and mapped to an empty list.
///
/// # Errors
///
/// Returns [`RowError`] when the canonical slug or default-locale title is
/// missing, or another column has the wrong type.
pub fn project_from_record(record: &Record, locales: &LocaleSet) -> Result<Project, RowError> {
    let slug = required_text(record, CANONICAL_SLUG_COLUMN)?;
    let mut copy = BTreeMap::new();
    for locale in locales.iter() {
        let title_column = locale.column("title");
        let Some(title) = optional_text(record, &title_column)? else {
            if locales.is_default(locale) {
                return Err(RowError::Missing(title_column));
            }
            continue;
        };
        copy.insert(
            locale.clone(),
            ProjectCopy {
                title,
                summary: optional_text(record, &locale.column("summary"))?.unwrap_or_default(),
                body: text_list(record, &locale.column("body"))?,
            },
        );
    }
    let highlights = match highlights(record.get("highlights"), locales) {
        Ok(highlights) => highlights,
        Err(reason) => {
            tracing::warn!(slug = %slug, reason, "malformed project highlights; using none");
            Vec::new()
        }
    };
    Ok(Project {
        locale_slugs: locale_slugs(record, locales)?,
        year: optional_uint(record, "year")?,
        category: optional_text(record, "category")?,
        stack: text_list(record, "stack")?,
        cover_image: optional_text(record, "cover_image")?,
        live_url: optional_text(record, "live_url")?,
        repo_url: optional_text(record, "repo_url")?,
        highlights,
        copy,
        slug,
    })
}

/// Unpacks the embedded highlights column.
///
/// Accepts a native JSON array or JSON-encoded text of
/// `[{ "value": ..., "label_<suffix>": ... }]`.
fn highlights(value: Option<&Value>, locales: &LocaleSet) -> Result<Vec<Highlight>, &'static str> {
    let parsed;
    let items = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::String(text)) if text.trim().is_empty() => return Ok(Vec::new()),
        Some(Value::String(text)) => {
            parsed = serde_json::from_str::<Value>(text).map_err(|_| "invalid json text")?;
            match &parsed {
                Value::Array(items) => items,
                _ => return Err("expected an array"),
            }
        }
        Some(Value::Array(items)) => items,
        Some(_) => return Err("expected an array"),
    };
    items
        .iter()
        .map(|item| {
            let Value::Object(entry) = item else {
                return Err("entry must be an object");
            };
            let value = match entry.get("value") {
                Some(Value::String(text)) => text.clone(),
                Some(Value::Number(number)) => number.to_string(),
                _ => return Err("entry value must be text or a number"),
            };
            let mut label = BTreeMap::new();
            for locale in locales.iter() {
                match entry.get(&locale.column("label")) {
                    None | Some(Value::Null) => {}
                    Some(Value::String(text)) => {
                        label.insert(locale.clone(), text.clone());
                    }
                    Some(_) => return Err("entry label must be text"),
                }
            }
            Ok(Highlight {
                value,
                label,
            })
        })
        .collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only unwraps are permitted.")]

    use serde_json::json;

    use super::*;

    /// Converts a JSON object literal into a record.
    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => Record::new(),
        }
    }

    /// Bilingual locale set used by the tests.
    fn locales() -> LocaleSet {
        LocaleSet::parse("en", &["en", "ro"]).unwrap()
    }

    #[test]
    fn text_list_accepts_native_and_encoded_arrays() {
        let row = record(json!({"a": ["x", "y"], "b": "[\"x\"]", "c": null, "d": 3}));
        assert_eq!(text_list(&row, "a").unwrap(), vec!["x", "y"]);
        assert_eq!(text_list(&row, "b").unwrap(), vec!["x"]);
        assert!(text_list(&row, "c").unwrap().is_empty());
        assert!(text_list(&row, "missing").unwrap().is_empty());
        assert!(text_list(&row, "d").is_err());
    }

    #[test]
    fn highlights_accept_text_encoded_json() {
        let value = json!("[{\"value\": 40, \"label_en\": \"faster\", \"label_ro\": \"mai rapid\"}]");
        let parsed = highlights(Some(&value), &locales()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].value, "40");
        assert_eq!(parsed[0].label.len(), 2);
    }

    #[test]
    fn malformed_highlights_map_to_empty() {
        let row = record(json!({
            "slug": "p",
            "title_en": "P",
            "highlights": "{not json"
        }));
        let project = project_from_record(&row, &locales()).unwrap();
        assert!(project.highlights.is_empty());
    }

    #[test]
    fn translation_keeps_empty_and_skips_null() {
        let ro = Locale::parse("ro").unwrap();
        let en = Locale::parse("en").unwrap();
        let row = record(json!({"namespace": "nav", "key": "home", "value_en": null, "value_ro": ""}));
        let mapped = translation_from_record(&row, &[&en, &ro]).unwrap();
        assert_eq!(mapped.value_for(&ro), Some(""));
        assert_eq!(mapped.value_for(&en), None);
    }

    #[test]
    fn translation_blank_key_maps_without_segments() {
        let en = Locale::parse("en").unwrap();
        let row = record(json!({"namespace": "zzz", "key": null, "value_en": "stray"}));
        let mapped = translation_from_record(&row, &[&en]).unwrap();
        assert_eq!(mapped.key, "");
        assert!(mapped.segments().is_empty());

        let typed = record(json!({"namespace": "nav", "key": 7, "value_en": "x"}));
        assert!(matches!(translation_from_record(&typed, &[&en]), Err(RowError::Type { .. })));
    }
}
