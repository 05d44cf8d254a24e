// src/application/dto/listings.rs
use crate::domain::listing::{Collection, Listing};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingDto {
    pub id: i64,
    pub collection: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub owner_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Listing> for ListingDto {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id.into(),
            collection: listing.collection.as_str().to_string(),
            title: listing.title.into_inner(),
            slug: listing.slug.into_inner(),
            summary: listing.summary.into_inner(),
            owner_id: listing.owner_id.into(),
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingPage {
    pub items: Vec<ListingDto>,
    pub limit: u32,
    pub offset: u32,
    /// Offset of the following page, absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugPreviewDto {
    pub collection: String,
    pub slug: String,
}

impl SlugPreviewDto {
    pub fn new(collection: Collection, slug: impl Into<String>) -> Self {
        Self {
            collection: collection.as_str().to_string(),
            slug: slug.into(),
        }
    }
}
