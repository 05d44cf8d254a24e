// src/application/queries/listings/preview.rs
use super::ListingQueryService;
use crate::{
    application::{dto::SlugPreviewDto, error::ApplicationResult},
    domain::{
        listing::{Collection, ListingId},
        slug::{SlugRequest, SlugTarget},
    },
};

/// Slug a create (or a rename of `current_id`) would receive right now. Nothing is
/// reserved, so a later write may still get a different one.
pub struct PreviewSlugQuery {
    pub collection: Collection,
    pub title: String,
    pub current_id: Option<i64>,
}

impl ListingQueryService {
    pub async fn preview_slug(&self, query: PreviewSlugQuery) -> ApplicationResult<SlugPreviewDto> {
        let target = match query.current_id {
            Some(raw) => SlugTarget::Update(ListingId::new(raw)?),
            None => SlugTarget::Create,
        };
        let slug = self
            .slug_service
            .generate_unique_slug(
                SlugRequest::new(query.collection, &query.title).with_target(target),
            )
            .await?;
        Ok(SlugPreviewDto::new(query.collection, slug.into_inner()))
    }
}
