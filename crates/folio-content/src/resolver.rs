// crates/folio-content/src/resolver.rs
// ============================================================================
// Module: Folio Content Resolver
// Description: Facade wiring configuration, baseline, and store together.
// Purpose: Provide the single entry point page-rendering callers hold.
// Dependencies: folio-core, folio-config, folio-store-http, thiserror, tracing
// ============================================================================

//! ## Overview
//! [`ContentResolver`] owns a [`ResolutionContext`] and hands out borrowed
//! component views: [`MessageTreeBuilder`] and one [`EntityRepository`] per
//! entity type. Construction is the only fallible step. An HTTP client that
//! cannot be built is logged and treated as an unconfigured remote.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use folio_config::ConfigError;
use folio_config::FolioConfig;
use folio_config::TablesConfig;
use folio_core::Article;
use folio_core::LocaleSet;
use folio_core::Project;
use folio_core::RemoteStore;
use folio_core::ResolutionObserver;
use folio_store_http::HttpRemoteStore;
use thiserror::Error;

use crate::baseline::BaselineError;
use crate::baseline::StaticBaseline;
use crate::fallback::ResolutionContext;
use crate::messages::MessageTreeBuilder;
use crate::repository::EntityRepository;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Resolver construction errors.
#[derive(Debug, Error)]
pub enum ResolverInitError {
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The static baseline is missing or corrupt.
    #[error(transparent)]
    Baseline(#[from] BaselineError),
}

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Entry point for content resolution.
///
/// # Invariants
/// - The baseline covers every supported locale.
pub struct ContentResolver {
    /// Shared resolution inputs.
    ctx: ResolutionContext,
}

impl ContentResolver {
    /// Creates a static-only resolver.
    #[must_use]
    pub fn new(locales: LocaleSet, baseline: StaticBaseline, tables: TablesConfig) -> Self {
        Self {
            ctx: ResolutionContext::new(locales, baseline, tables),
        }
    }

    /// Builds a resolver from validated configuration and the compiled baseline.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverInitError`] when the locale settings are invalid or
    /// the compiled baseline does not cover them.
    pub fn from_config(config: &FolioConfig) -> Result<Self, ResolverInitError> {
        let locales = config.locale_set()?;
        let baseline = StaticBaseline::compiled(&locales)?;
        let resolver = Self::new(locales, baseline, config.tables.clone());
        let Some(descriptor) = config.remote_descriptor() else {
            tracing::debug!("remote store not configured; resolving from baseline only");
            return Ok(resolver);
        };
        match HttpRemoteStore::new(&descriptor) {
            Ok(store) => {
                tracing::debug!(endpoint = %store.endpoint(), "remote store configured");
                Ok(resolver.with_store(Arc::new(store)))
            }
            Err(err) => {
                tracing::warn!(error = %err, "remote store unusable; resolving from baseline only");
                Ok(resolver)
            }
        }
    }

    /// Attaches a remote store.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn RemoteStore>) -> Self {
        self.ctx.store = Some(store);
        self
    }

    /// Attaches a resolution observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.ctx.observer = observer;
        self
    }

    /// Returns the supported locales.
    #[must_use]
    pub const fn locales(&self) -> &LocaleSet {
        self.ctx.locales()
    }

    /// Returns the resolution context.
    #[must_use]
    pub const fn context(&self) -> &ResolutionContext {
        &self.ctx
    }

    /// Returns the message tree builder.
    #[must_use]
    pub const fn messages(&self) -> MessageTreeBuilder<'_> {
        MessageTreeBuilder::new(&self.ctx)
    }

    /// Returns the article repository.
    #[must_use]
    pub fn articles(&self) -> EntityRepository<'_, Article> {
        EntityRepository::new(&self.ctx)
    }

    /// Returns the project repository.
    #[must_use]
    pub fn projects(&self) -> EntityRepository<'_, Project> {
        EntityRepository::new(&self.ctx)
    }
}
