// src/domain/listing/entity.rs
use crate::domain::listing::value_objects::{Collection, ListingId, ListingSummary, ListingTitle};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A named entity addressable by its per-collection slug.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: ListingId,
    pub collection: Collection,
    pub title: ListingTitle,
    pub slug: Slug,
    pub summary: ListingSummary,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewListing {
    pub collection: Collection,
    pub title: ListingTitle,
    pub slug: Slug,
    pub summary: ListingSummary,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ListingUpdate {
    pub collection: Collection,
    pub id: ListingId,
    pub title: Option<ListingTitle>,
    pub slug: Option<Slug>,
    pub summary: Option<ListingSummary>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListingUpdate {
    pub fn new(collection: Collection, id: ListingId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            collection,
            id,
            title: None,
            slug: None,
            summary: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ListingTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_summary(mut self, summary: ListingSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.slug.is_none() && self.summary.is_none()
    }
}
