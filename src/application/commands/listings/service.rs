// src/application/commands/listings/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        errors::DomainError,
        listing::{Collection, ListingReadRepository, ListingWriteRepository},
        slug::UniqueSlugService,
    },
};

pub struct ListingCommandService {
    pub(super) write_repo: Arc<dyn ListingWriteRepository>,
    pub(super) read_repo: Arc<dyn ListingReadRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) max_slug_attempts: u32,
}

impl ListingCommandService {
    pub fn new(
        write_repo: Arc<dyn ListingWriteRepository>,
        read_repo: Arc<dyn ListingReadRepository>,
        slug_service: Arc<UniqueSlugService>,
        clock: Arc<dyn Clock>,
        max_slug_attempts: u32,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            max_slug_attempts: max_slug_attempts.max(1),
        }
    }

    /// A lost slug race is retried with a freshly generated slug until attempts run out.
    pub(super) fn should_retry(
        &self,
        collection: Collection,
        attempt: u32,
        err: &DomainError,
    ) -> bool {
        let DomainError::SlugConflict(slug) = err else {
            return false;
        };
        if attempt >= self.max_slug_attempts {
            tracing::warn!(
                collection = %collection,
                slug = %slug,
                attempt,
                "giving up on slug after repeated conflicts"
            );
            return false;
        }
        tracing::warn!(
            collection = %collection,
            slug = %slug,
            attempt,
            "slug taken by a concurrent write, regenerating"
        );
        true
    }
}
