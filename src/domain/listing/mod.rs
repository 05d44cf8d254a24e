// src/domain/listing/mod.rs
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Listing, ListingUpdate, NewListing};
pub use repository::{ListingReadRepository, ListingWriteRepository};
pub use value_objects::{Collection, ListingId, ListingSummary, ListingTitle};
