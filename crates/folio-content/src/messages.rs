// crates/folio-content/src/messages.rs
// ============================================================================
// Module: Folio Message Tree Builder
// Description: Rebuilds override trees from translation rows and merges them.
// Purpose: Resolve the UI message tree for a locale.
// Dependencies: folio-core, serde, tracing
// ============================================================================

//! ## Overview
//! A build reads every translation row (ordered by namespace, then key),
//! writes each row's value for the requested locale at its key path in a
//! fresh override tree, and deep-merges that tree over the locale's baseline
//! tree. Rows without a value for the locale are skipped. Structural
//! collisions between rows resolve in favor of the later row and are reported
//! as [`PathConflict`]s.

// ============================================================================
// SECTION: Imports
// ============================================================================

use folio_core::Locale;
use folio_core::MessageTree;
use folio_core::Operation;
use folio_core::Origin;
use folio_core::PathConflict;
use folio_core::SelectQuery;
use folio_core::decode_stored_value;
use folio_core::deep_merge;
use serde::Serialize;

use crate::fallback::RemoteReadError;
use crate::fallback::ResolutionContext;
use crate::rows::translation_from_record;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Outcome of a message build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBuild {
    /// Merged message tree.
    pub tree: MessageTree,
    /// Source of the overrides.
    pub origin: Origin,
    /// Path collisions seen while rebuilding overrides.
    pub conflicts: Vec<PathConflict>,
}

/// Message tree builder over a resolution context.
#[derive(Clone, Copy)]
pub struct MessageTreeBuilder<'a> {
    /// Shared resolution inputs.
    ctx: &'a ResolutionContext,
}

impl<'a> MessageTreeBuilder<'a> {
    /// Creates a builder over `ctx`.
    #[must_use]
    pub const fn new(ctx: &'a ResolutionContext) -> Self {
        Self {
            ctx,
        }
    }

    /// Returns the merged message tree for `locale`.
    ///
    /// Unsupported locales resolve as the default locale.
    #[must_use]
    pub fn build(&self, locale: &Locale) -> MessageTree {
        self.build_report(locale).tree
    }

    /// Returns the merged message tree plus origin and collision details.
    #[must_use]
    pub fn build_report(&self, locale: &Locale) -> MessageBuild {
        let locale = self.ctx.locales.effective(locale);
        let resolved = self.ctx.read_through(
            Operation::BuildMessages,
            |store| {
                let query = SelectQuery::table(self.ctx.tables.translations.as_str())
                    .columns(["namespace".to_string(), "key".to_string(), locale.column("value")])
                    .order_asc("namespace")
                    .order_asc("key");
                let records = store.select(&query)?;
                if records.is_empty() {
                    return Ok(None);
                }
                let mut overrides = MessageTree::new();
                let mut conflicts = Vec::new();
                for record in &records {
                    let row = translation_from_record(record, &[locale])?;
                    let Some(value) = row.value_for(locale) else {
                        continue;
                    };
                    let segments = row.segments();
                    if segments.is_empty() {
                        tracing::debug!(
                            locale = %locale,
                            namespace = row.namespace.as_str(),
                            key = row.key.as_str(),
                            "skipping translation row without a path"
                        );
                        continue;
                    }
                    conflicts.extend(overrides.set_path(&segments, decode_stored_value(value)));
                }
                Ok::<_, RemoteReadError>(Some((overrides, conflicts)))
            },
            || (MessageTree::new(), Vec::new()),
        );
        let (overrides, conflicts) = resolved.value;
        for conflict in &conflicts {
            tracing::warn!(
                locale = %locale,
                path = %conflict.path,
                kind = conflict.kind.as_str(),
                "translation path collision; later row wins"
            );
        }
        let base = self.ctx.baseline.messages(locale).cloned().unwrap_or_default();
        MessageBuild {
            tree: deep_merge(base, overrides),
            origin: resolved.origin,
            conflicts,
        }
    }
}
