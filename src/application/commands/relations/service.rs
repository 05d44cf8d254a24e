// src/application/commands/relations/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{listing::ListingReadRepository, relation::RelationRepository},
};

pub struct RelationCommandService {
    pub(super) listing_repo: Arc<dyn ListingReadRepository>,
    pub(super) relation_repo: Arc<dyn RelationRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl RelationCommandService {
    pub fn new(
        listing_repo: Arc<dyn ListingReadRepository>,
        relation_repo: Arc<dyn RelationRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            listing_repo,
            relation_repo,
            clock,
        }
    }
}
