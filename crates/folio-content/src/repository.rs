// crates/folio-content/src/repository.rs
// ============================================================================
// Module: Folio Entity Repository
// Description: Read-through listing and slug lookup for content entities.
// Purpose: Serve articles and projects from the remote store or the baseline.
// Dependencies: folio-core, folio-config, serde
// ============================================================================

//! ## Overview
//! [`EntityRepository`] is generic over [`EntitySchema`], which ties an
//! entity type to its relation, column list, row mapper, and baseline
//! collection. Articles and projects share every operation:
//! - `list_all`: remote rows ordered by `sort_order`, else the baseline.
//! - `get_by_slug`: locale column, then canonical column, then the baseline
//!   by canonical slug; `None` only when every source misses.
//! - `list_slugs_for_locale`: the locale slug when set, else canonical.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::marker::PhantomData;

use folio_config::TablesConfig;
use folio_core::Adjacent;
use folio_core::Article;
use folio_core::ContentEntity;
use folio_core::Locale;
use folio_core::LocaleSet;
use folio_core::Operation;
use folio_core::Project;
use folio_core::Record;
use folio_core::SelectQuery;
use serde::Serialize;

use crate::baseline::StaticBaseline;
use crate::fallback::RemoteReadError;
use crate::fallback::ResolutionContext;
use crate::rows::RowError;
use crate::rows::article_columns;
use crate::rows::article_from_record;
use crate::rows::optional_text;
use crate::rows::project_columns;
use crate::rows::project_from_record;
use crate::rows::required_text;
use crate::slug::CANONICAL_SLUG_COLUMN;
use crate::slug::SlugResolver;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Numeric listing-order column shared by entity relations.
pub const SORT_ORDER_COLUMN: &str = "sort_order";

// ============================================================================
// SECTION: Entity Schema
// ============================================================================

/// Storage binding for a content entity type.
pub trait EntitySchema: ContentEntity + Serialize + 'static {
    /// Returns the configured relation name.
    fn table(tables: &TablesConfig) -> &str;

    /// Returns the columns a full-row selection projects.
    fn columns(locales: &LocaleSet) -> Vec<String>;

    /// Maps one remote row.
    ///
    /// # Errors
    ///
    /// Returns [`RowError`] when the row cannot be mapped.
    fn from_record(record: &Record, locales: &LocaleSet) -> Result<Self, RowError>;

    /// Returns the baseline collection in declared order.
    fn baseline(baseline: &StaticBaseline) -> &[Self];
}

impl EntitySchema for Article {
    fn table(tables: &TablesConfig) -> &str {
        &tables.articles
    }

    fn columns(locales: &LocaleSet) -> Vec<String> {
        article_columns(locales)
    }

    fn from_record(record: &Record, locales: &LocaleSet) -> Result<Self, RowError> {
        article_from_record(record, locales)
    }

    fn baseline(baseline: &StaticBaseline) -> &[Self] {
        baseline.articles()
    }
}

impl EntitySchema for Project {
    fn table(tables: &TablesConfig) -> &str {
        &tables.projects
    }

    fn columns(locales: &LocaleSet) -> Vec<String> {
        project_columns(locales)
    }

    fn from_record(record: &Record, locales: &LocaleSet) -> Result<Self, RowError> {
        project_from_record(record, locales)
    }

    fn baseline(baseline: &StaticBaseline) -> &[Self] {
        baseline.projects()
    }
}

/// A `(locale, public slug)` pair for path enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugParam {
    /// Locale the slug belongs to.
    pub locale: Locale,
    /// Public slug in that locale.
    pub slug: String,
}

// ============================================================================
// SECTION: Repository
// ============================================================================

/// Read-through repository for one entity type.
pub struct EntityRepository<'a, E> {
    /// Shared resolution inputs.
    ctx: &'a ResolutionContext,
    /// Slug column mapping.
    slugs: SlugResolver,
    /// Entity type marker.
    entity: PhantomData<fn() -> E>,
}

impl<'a, E: EntitySchema> EntityRepository<'a, E> {
    /// Creates a repository over `ctx`.
    #[must_use]
    pub fn new(ctx: &'a ResolutionContext) -> Self {
        Self {
            ctx,
            slugs: SlugResolver::new(ctx.locales.clone()),
            entity: PhantomData,
        }
    }

    /// Returns the slug resolver.
    #[must_use]
    pub const fn slug_resolver(&self) -> &SlugResolver {
        &self.slugs
    }

    /// Base selection against the entity relation in listing order.
    fn select(&self, columns: Vec<String>) -> SelectQuery {
        SelectQuery::table(E::table(&self.ctx.tables))
            .columns(columns)
            .order_asc(SORT_ORDER_COLUMN)
            .order_asc(CANONICAL_SLUG_COLUMN)
    }

    /// Maps every record, failing on the first unmappable row.
    fn map_all(&self, records: &[Record]) -> Result<Vec<E>, RowError> {
        records.iter().map(|record| E::from_record(record, &self.ctx.locales)).collect()
    }

    /// Returns every entity in listing order.
    #[must_use]
    pub fn list_all(&self) -> Vec<E> {
        self.ctx
            .read_through(
                Operation::ListAll(E::KIND),
                |store| {
                    let records = store.select(&self.select(E::columns(&self.ctx.locales)))?;
                    if records.is_empty() {
                        return Ok(None);
                    }
                    Ok(Some(self.map_all(&records)?))
                },
                || E::baseline(&self.ctx.baseline).to_vec(),
            )
            .into_value()
    }

    /// Returns the entity whose public slug in `locale` is `slug`.
    ///
    /// `None` for `locale` means the default locale. Returns `None` only when
    /// neither the remote store nor the baseline has a match. A blank `slug`
    /// never matches and sends no remote query.
    #[must_use]
    pub fn get_by_slug(&self, slug: &str, locale: Option<&Locale>) -> Option<E> {
        let locale = locale.unwrap_or_else(|| self.ctx.locales.default_locale());
        self.ctx
            .read_through(
                Operation::GetBySlug(E::KIND),
                |store| {
                    if slug.trim().is_empty() {
                        return Ok(None);
                    }
                    for column in self.slugs.lookup_order(locale) {
                        let query =
                            self.select(E::columns(&self.ctx.locales)).eq(column, slug).limit(1);
                        let records = store.select(&query)?;
                        if let Some(record) = records.first() {
                            let entity = E::from_record(record, &self.ctx.locales)?;
                            return Ok(Some(Some(entity)));
                        }
                    }
                    Ok::<_, RemoteReadError>(None)
                },
                || {
                    E::baseline(&self.ctx.baseline)
                        .iter()
                        .find(|entity| !slug.trim().is_empty() && entity.slug() == slug)
                        .cloned()
                },
            )
            .into_value()
    }

    /// Returns the public slug of every entity for `locale`, in listing order.
    ///
    /// The baseline has no locale slugs, so a fallback yields canonical slugs.
    #[must_use]
    pub fn list_slugs_for_locale(&self, locale: &Locale) -> Vec<String> {
        let column = self.slugs.resolve_column(locale);
        self.ctx
            .read_through(
                Operation::ListSlugs(E::KIND),
                |store| {
                    let mut columns = vec![CANONICAL_SLUG_COLUMN.to_string()];
                    if column != CANONICAL_SLUG_COLUMN {
                        columns.push(column.clone());
                    }
                    let records = store.select(&self.select(columns))?;
                    if records.is_empty() {
                        return Ok(None);
                    }
                    let slugs = records
                        .iter()
                        .map(|record| -> Result<String, RowError> {
                            let canonical = required_text(record, CANONICAL_SLUG_COLUMN)?;
                            let localized = optional_text(record, &column)?;
                            Ok(localized.unwrap_or(canonical))
                        })
                        .collect::<Result<Vec<_>, RowError>>()?;
                    Ok(Some(slugs))
                },
                || {
                    E::baseline(&self.ctx.baseline)
                        .iter()
                        .map(|entity| entity.slug().to_string())
                        .collect()
                },
            )
            .into_value()
    }

    /// Returns the entities listed immediately before and after `slug`.
    ///
    /// `slug` is a canonical slug; an unknown slug has no neighbors.
    #[must_use]
    pub fn adjacent(&self, slug: &str) -> Adjacent<E> {
        let entities = self.list_all();
        let Some(index) = entities.iter().position(|entity| entity.slug() == slug) else {
            return Adjacent::none();
        };
        let next = entities.get(index + 1).cloned();
        let previous = index.checked_sub(1).and_then(|prev| entities.get(prev).cloned());
        Adjacent {
            previous,
            next,
        }
    }

    /// Returns every `(locale, public slug)` pair across supported locales.
    #[must_use]
    pub fn list_slug_params(&self) -> Vec<SlugParam> {
        self.ctx
            .locales
            .iter()
            .flat_map(|locale| {
                self.list_slugs_for_locale(locale).into_iter().map(|slug| SlugParam {
                    locale: locale.clone(),
                    slug,
                })
            })
            .collect()
    }
}
