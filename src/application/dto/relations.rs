// src/application/dto/relations.rs
use crate::domain::relation::{RelationKey, RelationState};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelationStateDto {
    pub collection: String,
    pub listing_id: i64,
    pub kind: String,
    pub active: bool,
    pub changed: bool,
    pub count: u64,
}

impl RelationStateDto {
    pub fn from_parts(key: &RelationKey, state: RelationState) -> Self {
        Self {
            collection: key.collection.as_str().to_string(),
            listing_id: key.listing_id.into(),
            kind: key.kind.as_str().to_string(),
            active: state.active,
            changed: state.changed,
            count: state.count,
        }
    }
}
