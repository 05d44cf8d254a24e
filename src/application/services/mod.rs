// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{listings::ListingCommandService, relations::RelationCommandService},
        ports::{security::TokenManager, time::Clock, util::SlugGenerator},
        queries::listings::ListingQueryService,
    },
    domain::{
        listing::{ListingReadRepository, ListingWriteRepository},
        relation::RelationRepository,
        slug::{SlugStore, UniqueSlugService},
    },
};

/// Repositories and adapters the application services are assembled from.
pub struct ServiceDependencies {
    pub listing_write_repo: Arc<dyn ListingWriteRepository>,
    pub listing_read_repo: Arc<dyn ListingReadRepository>,
    pub slug_store: Arc<dyn SlugStore>,
    pub relation_repo: Arc<dyn RelationRepository>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub max_slug_attempts: u32,
}

pub struct ApplicationServices {
    pub listing_commands: Arc<ListingCommandService>,
    pub listing_queries: Arc<ListingQueryService>,
    pub relation_commands: Arc<RelationCommandService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            listing_write_repo,
            listing_read_repo,
            slug_store,
            relation_repo,
            token_manager,
            clock,
            slugger,
            max_slug_attempts,
        } = deps;

        let slug_service = Arc::new(UniqueSlugService::new(
            slug_store,
            slugger,
            Arc::clone(&clock),
        ));

        let listing_commands = Arc::new(ListingCommandService::new(
            listing_write_repo,
            Arc::clone(&listing_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            max_slug_attempts,
        ));

        let listing_queries = Arc::new(ListingQueryService::new(
            Arc::clone(&listing_read_repo),
            slug_service,
        ));

        let relation_commands = Arc::new(RelationCommandService::new(
            listing_read_repo,
            relation_repo,
            clock,
        ));

        Self {
            listing_commands,
            listing_queries,
            relation_commands,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
