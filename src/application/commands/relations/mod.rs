// src/application/commands/relations/mod.rs
mod change;
mod service;

pub use change::{ChangeRelationCommand, ListingRef, RelationOp};
pub use service::RelationCommandService;
