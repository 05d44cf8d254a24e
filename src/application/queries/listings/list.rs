// src/application/queries/listings/list.rs
use super::ListingQueryService;
use crate::{
    application::{dto::ListingPage, error::ApplicationResult},
    domain::listing::Collection,
};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub struct ListListingsQuery {
    pub collection: Collection,
    pub limit: u32,
    pub offset: u32,
}

impl ListingQueryService {
    pub async fn list_listings(&self, query: ListListingsQuery) -> ApplicationResult<ListingPage> {
        let limit = if query.limit == 0 {
            DEFAULT_LIMIT
        } else {
            query.limit.min(MAX_LIMIT)
        };

        let mut records = self
            .read_repo
            .list(query.collection, limit + 1, query.offset)
            .await?;

        let next_offset = if records.len() > limit as usize {
            records.truncate(limit as usize);
            Some(query.offset.saturating_add(limit))
        } else {
            None
        };

        Ok(ListingPage {
            items: records.into_iter().map(Into::into).collect(),
            limit,
            offset: query.offset,
            next_offset,
        })
    }
}
