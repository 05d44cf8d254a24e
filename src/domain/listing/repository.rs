// src/domain/listing/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::listing::entity::{Listing, ListingUpdate, NewListing};
use crate::domain::listing::value_objects::{Collection, ListingId};
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait ListingWriteRepository: Send + Sync {
    /// Fails with `DomainError::SlugConflict` when the slug index rejects the row.
    async fn insert(&self, listing: NewListing) -> DomainResult<Listing>;
    /// Fails with `DomainError::Conflict` when `original_updated_at` is stale.
    async fn update(&self, update: ListingUpdate) -> DomainResult<Listing>;
    /// Removes the listing together with every relation pointing at it.
    async fn delete(&self, collection: Collection, id: ListingId) -> DomainResult<()>;
}

#[async_trait]
pub trait ListingReadRepository: Send + Sync {
    async fn find_by_id(&self, collection: Collection, id: ListingId)
    -> DomainResult<Option<Listing>>;
    async fn find_by_slug(&self, collection: Collection, slug: &Slug)
    -> DomainResult<Option<Listing>>;
    async fn list(&self, collection: Collection, limit: u32, offset: u32)
    -> DomainResult<Vec<Listing>>;
}
