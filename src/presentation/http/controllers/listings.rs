// src/presentation/http/controllers/listings.rs
use crate::application::{
    commands::listings::{CreateListingCommand, DeleteListingCommand, UpdateListingCommand},
    dto::{ListingDto, ListingPage, SlugPreviewDto},
    queries::listings::{
        GetListingByIdQuery, GetListingBySlugQuery, ListListingsQuery, PreviewSlugQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{parse_collection, parse_id};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListingListParams {
    /// Page size, 20 when omitted, at most 100.
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SlugPreviewParams {
    pub title: String,
    /// Listing being renamed; its own slug does not count as a collision.
    #[serde(default)]
    pub current_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateListingRequest {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateListingRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Recompute the slug when the title changes.
    #[serde(default)]
    pub reslug: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/{collection}",
    params(
        ("collection" = String, Path, description = "products, teams, tours or courses"),
        ListingListParams
    ),
    responses(
        (status = 200, description = "Newest listings first.", body = ListingPage),
        (status = 404, description = "Unknown collection.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Listings"
)]
pub async fn list_listings(
    Extension(state): Extension<HttpState>,
    Path(collection): Path<String>,
    Query(params): Query<ListingListParams>,
) -> HttpResult<Json<ListingPage>> {
    let collection = parse_collection(&collection)?;
    state
        .services
        .listing_queries
        .list_listings(ListListingsQuery {
            collection,
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/{collection}",
    params(("collection" = String, Path, description = "products, teams, tours or courses")),
    request_body = CreateListingRequest,
    responses(
        (status = 201, description = "Listing created with a unique slug.", body = ListingDto),
        (status = 400, description = "Invalid title or summary.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown collection.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug stayed contended after every retry.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Listings"
)]
pub async fn create_listing(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(collection): Path<String>,
    Json(payload): Json<CreateListingRequest>,
) -> HttpResult<(StatusCode, Json<ListingDto>)> {
    let collection = parse_collection(&collection)?;
    let command = CreateListingCommand {
        collection,
        title: payload.title,
        summary: payload.summary,
    };

    let listing = state
        .services
        .listing_commands
        .create_listing(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(listing)))
}

#[utoipa::path(
    get,
    path = "/api/v1/{collection}/slug-preview",
    params(
        ("collection" = String, Path, description = "products, teams, tours or courses"),
        SlugPreviewParams
    ),
    responses(
        (status = 200, description = "Slug a write would receive now.", body = SlugPreviewDto),
        (status = 400, description = "Invalid current_id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown collection.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Listings"
)]
pub async fn preview_slug(
    Extension(state): Extension<HttpState>,
    Path(collection): Path<String>,
    Query(params): Query<SlugPreviewParams>,
) -> HttpResult<Json<SlugPreviewDto>> {
    let collection = parse_collection(&collection)?;
    state
        .services
        .listing_queries
        .preview_slug(PreviewSlugQuery {
            collection,
            title: params.title,
            current_id: params.current_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/{collection}/by-slug/{slug}",
    params(
        ("collection" = String, Path, description = "products, teams, tours or courses"),
        ("slug" = String, Path, description = "Listing slug, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Listing found.", body = ListingDto),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Listings"
)]
pub async fn get_listing_by_slug(
    Extension(state): Extension<HttpState>,
    Path((collection, slug)): Path<(String, String)>,
) -> HttpResult<Json<ListingDto>> {
    let collection = parse_collection(&collection)?;
    state
        .services
        .listing_queries
        .get_listing_by_slug(GetListingBySlugQuery { collection, slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "products, teams, tours or courses"),
        ("id" = i64, Path, description = "Listing identifier")
    ),
    responses(
        (status = 200, description = "Listing found.", body = ListingDto),
        (status = 400, description = "Malformed id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Listings"
)]
pub async fn get_listing(
    Extension(state): Extension<HttpState>,
    Path((collection, id)): Path<(String, String)>,
) -> HttpResult<Json<ListingDto>> {
    let collection = parse_collection(&collection)?;
    let id = parse_id(&id)?;
    state
        .services
        .listing_queries
        .get_listing_by_id(GetListingByIdQuery { collection, id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "products, teams, tours or courses"),
        ("id" = i64, Path, description = "Listing identifier")
    ),
    request_body = UpdateListingRequest,
    responses(
        (status = 200, description = "Listing updated.", body = ListingDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent modification or slug contention.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Listings"
)]
pub async fn update_listing(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((collection, id)): Path<(String, String)>,
    Json(payload): Json<UpdateListingRequest>,
) -> HttpResult<Json<ListingDto>> {
    let collection = parse_collection(&collection)?;
    let id = parse_id(&id)?;
    let command = UpdateListingCommand {
        collection,
        id,
        title: payload.title,
        summary: payload.summary,
        reslug: payload.reslug,
    };

    state
        .services
        .listing_commands
        .update_listing(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "products, teams, tours or courses"),
        ("id" = i64, Path, description = "Listing identifier")
    ),
    responses(
        (status = 200, description = "Listing and its relations removed.", body = StatusResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Listings"
)]
pub async fn delete_listing(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((collection, id)): Path<(String, String)>,
) -> HttpResult<Json<StatusResponse>> {
    let collection = parse_collection(&collection)?;
    let id = parse_id(&id)?;
    state
        .services
        .listing_commands
        .delete_listing(&user, DeleteListingCommand { collection, id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
