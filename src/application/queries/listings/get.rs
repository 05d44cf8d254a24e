// src/application/queries/listings/get.rs
use super::ListingQueryService;
use crate::{
    application::{
        dto::ListingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        listing::{Collection, ListingId},
        slug::Slug,
    },
};

pub struct GetListingByIdQuery {
    pub collection: Collection,
    pub id: i64,
}

pub struct GetListingBySlugQuery {
    pub collection: Collection,
    pub slug: String,
}

impl ListingQueryService {
    pub async fn get_listing_by_id(
        &self,
        query: GetListingByIdQuery,
    ) -> ApplicationResult<ListingDto> {
        let id = ListingId::new(query.id)?;
        self.read_repo
            .find_by_id(query.collection, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| {
                ApplicationError::not_found(format!("{} {id} not found", query.collection))
            })
    }

    pub async fn get_listing_by_slug(
        &self,
        query: GetListingBySlugQuery,
    ) -> ApplicationResult<ListingDto> {
        let not_found = || {
            ApplicationError::not_found(format!("{} '{}' not found", query.collection, query.slug))
        };
        // A value that can never be stored cannot match anything.
        let slug = Slug::from_path(&query.slug).map_err(|_| not_found())?;
        self.read_repo
            .find_by_slug(query.collection, &slug)
            .await?
            .map(Into::into)
            .ok_or_else(not_found)
    }
}
