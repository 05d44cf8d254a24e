// src/application/queries/listings/service.rs
use std::sync::Arc;

use crate::domain::{listing::ListingReadRepository, slug::UniqueSlugService};

pub struct ListingQueryService {
    pub(super) read_repo: Arc<dyn ListingReadRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
}

impl ListingQueryService {
    pub fn new(
        read_repo: Arc<dyn ListingReadRepository>,
        slug_service: Arc<UniqueSlugService>,
    ) -> Self {
        Self {
            read_repo,
            slug_service,
        }
    }
}
