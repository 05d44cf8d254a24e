// src/domain/slug/mod.rs
pub mod pattern;
pub mod repository;
pub mod service;
pub mod value_objects;

pub use pattern::SlugPattern;
pub use repository::SlugStore;
pub use service::{SlugRequest, UniqueSlugService};
pub use value_objects::{Slug, SlugField, SlugTarget};
