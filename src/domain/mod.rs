// src/domain/mod.rs
pub mod errors;
pub mod listing;
pub mod relation;
pub mod slug;
pub mod user;
