// src/application/dto/mod.rs
pub mod auth;
pub mod listings;
pub mod relations;
pub mod serde_time;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use listings::{ListingDto, ListingPage, SlugPreviewDto};
pub use relations::RelationStateDto;
