// src/domain/relation/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::relation::entity::{RelationKey, RelationState};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Relation writes. Every method must be a conditional write in the store; no
/// implementation may read membership first and then decide what to write.
#[async_trait]
pub trait RelationRepository: Send + Sync {
    /// Remove when present, otherwise add.
    async fn toggle(&self, key: RelationKey, now: DateTime<Utc>) -> DomainResult<RelationState>;
    /// Idempotent add.
    async fn set(&self, key: RelationKey, now: DateTime<Utc>) -> DomainResult<RelationState>;
    /// Idempotent remove.
    async fn unset(&self, key: RelationKey) -> DomainResult<RelationState>;
}
