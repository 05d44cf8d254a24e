// src/domain/slug/service.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::DomainResult;
use crate::domain::listing::Collection;
use crate::domain::slug::{Slug, SlugField, SlugPattern, SlugStore, SlugTarget};

const FALLBACK_PREFIX: &str = "untitled";

/// Parameters for a single slug generation.
#[derive(Debug, Clone)]
pub struct SlugRequest<'a> {
    pub collection: Collection,
    pub title: &'a str,
    pub field: SlugField,
    pub target: SlugTarget,
}

impl<'a> SlugRequest<'a> {
    pub fn new(collection: Collection, title: &'a str) -> Self {
        Self {
            collection,
            title,
            field: SlugField::default(),
            target: SlugTarget::Create,
        }
    }

    pub fn with_field(mut self, field: SlugField) -> Self {
        self.field = field;
        self
    }

    pub fn with_target(mut self, target: SlugTarget) -> Self {
        self.target = target;
        self
    }
}

/// Produces slugs that are unique within a collection at the moment of the check.
///
/// Two reads, no locking: concurrent callers with the same title can both get the same
/// answer, and the storage unique index decides which write wins.
pub struct UniqueSlugService {
    store: Arc<dyn SlugStore>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl UniqueSlugService {
    pub fn new(
        store: Arc<dyn SlugStore>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            generator,
            clock,
        }
    }

    /// Normalized title, or `untitled-<unix millis>` when nothing survives
    /// normalization.
    pub fn base_slug(&self, title: &str) -> String {
        let base = self.generator.slugify(title);
        if base.is_empty() {
            let millis = self.clock.now().timestamp_millis().max(0);
            format!("{FALLBACK_PREFIX}-{millis}")
        } else {
            base
        }
    }

    pub async fn generate_unique_slug(&self, request: SlugRequest<'_>) -> DomainResult<Slug> {
        let SlugRequest {
            collection,
            title,
            field,
            target,
        } = request;
        let exclude = target.excluded_id();
        let base = self.base_slug(title);

        let taken = self
            .store
            .find_slug(collection, &field, &base, exclude)
            .await?;
        if taken.is_none() {
            return Slug::new(base);
        }

        let pattern = SlugPattern::new(&base)?;
        let existing = self
            .store
            .find_slugs_matching(collection, &field, &pattern, exclude)
            .await?;
        let next = pattern.next_suffix(existing.iter().map(String::as_str));

        tracing::debug!(
            collection = %collection,
            field = %field,
            base = %base,
            siblings = existing.len(),
            next = %next,
            "slug collision resolved with numeric suffix"
        );

        Slug::new(format!("{base}-{next}"))
    }
}
