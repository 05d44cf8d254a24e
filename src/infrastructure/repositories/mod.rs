// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_listing;
mod postgres_relation;
mod postgres_slug;

pub use error::map_sqlx;
pub use postgres_listing::{PostgresListingReadRepository, PostgresListingWriteRepository};
pub use postgres_relation::PostgresRelationRepository;
pub use postgres_slug::PostgresSlugStore;
