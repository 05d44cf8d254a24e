// src/domain/relation/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{RelationKey, RelationKind, RelationState};
pub use repository::RelationRepository;
