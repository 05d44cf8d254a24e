// src/application/commands/mod.rs
pub mod listings;
pub mod relations;

mod capability;
