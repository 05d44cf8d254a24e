// src/domain/slug/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::listing::{Collection, ListingId};
use crate::domain::slug::{SlugField, SlugPattern};
use async_trait::async_trait;

/// Read-only view over the slug attribute of a collection.
#[async_trait]
pub trait SlugStore: Send + Sync {
    /// Exact match on `field`, skipping the entity `exclude` if given.
    async fn find_slug(
        &self,
        collection: Collection,
        field: &SlugField,
        slug: &str,
        exclude: Option<ListingId>,
    ) -> DomainResult<Option<String>>;

    /// Every stored value of `field` matching `pattern`, skipping `exclude`.
    async fn find_slugs_matching(
        &self,
        collection: Collection,
        field: &SlugField,
        pattern: &SlugPattern,
        exclude: Option<ListingId>,
    ) -> DomainResult<Vec<String>>;
}
