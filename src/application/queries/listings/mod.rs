// src/application/queries/listings/mod.rs
mod get;
mod list;
mod preview;
mod service;

pub use get::{GetListingByIdQuery, GetListingBySlugQuery};
pub use list::ListListingsQuery;
pub use preview::PreviewSlugQuery;
pub use service::ListingQueryService;
