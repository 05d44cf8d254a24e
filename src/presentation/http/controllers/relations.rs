// src/presentation/http/controllers/relations.rs
use crate::application::{
    commands::relations::{ChangeRelationCommand, ListingRef, RelationOp},
    dto::{AuthenticatedUser, RelationStateDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

use super::{parse_collection, parse_id, parse_kind};

async fn change(
    state: &HttpState,
    user: &AuthenticatedUser,
    collection: &str,
    listing: ListingRef,
    kind: &str,
    op: RelationOp,
) -> HttpResult<Json<RelationStateDto>> {
    let command = ChangeRelationCommand {
        collection: parse_collection(collection)?,
        listing,
        kind: parse_kind(kind)?,
        op,
    };

    state
        .services
        .relation_commands
        .change_relation(user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/{collection}/{id}/{kind}/toggle",
    params(
        ("collection" = String, Path, description = "products, teams, tours or courses"),
        ("id" = i64, Path, description = "Listing identifier"),
        ("kind" = String, Path, description = "bookmark, member or vote")
    ),
    responses(
        (status = 200, description = "Relation flipped; reports the new state and count.", body = RelationStateDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown collection, kind or listing.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Relations"
)]
pub async fn toggle_by_id(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((collection, id, kind)): Path<(String, String, String)>,
) -> HttpResult<Json<RelationStateDto>> {
    let listing = ListingRef::Id(parse_id(&id)?);
    change(&state, &user, &collection, listing, &kind, RelationOp::Toggle).await
}

#[utoipa::path(
    post,
    path = "/api/v1/{collection}/by-slug/{slug}/{kind}/toggle",
    params(
        ("collection" = String, Path, description = "products, teams, tours or courses"),
        ("slug" = String, Path, description = "Listing slug"),
        ("kind" = String, Path, description = "bookmark, member or vote")
    ),
    responses(
        (status = 200, description = "Relation flipped; reports the new state and count.", body = RelationStateDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown collection, kind or listing.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Relations"
)]
pub async fn toggle_by_slug(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((collection, slug, kind)): Path<(String, String, String)>,
) -> HttpResult<Json<RelationStateDto>> {
    let listing = ListingRef::Slug(slug);
    change(&state, &user, &collection, listing, &kind, RelationOp::Toggle).await
}

#[utoipa::path(
    put,
    path = "/api/v1/{collection}/{id}/{kind}",
    params(
        ("collection" = String, Path, description = "products, teams, tours or courses"),
        ("id" = i64, Path, description = "Listing identifier"),
        ("kind" = String, Path, description = "bookmark, member or vote")
    ),
    responses(
        (status = 200, description = "Relation present; repeat calls are no-ops.", body = RelationStateDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown collection, kind or listing.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Relations"
)]
pub async fn set_relation(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((collection, id, kind)): Path<(String, String, String)>,
) -> HttpResult<Json<RelationStateDto>> {
    let listing = ListingRef::Id(parse_id(&id)?);
    change(&state, &user, &collection, listing, &kind, RelationOp::Set).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/{collection}/{id}/{kind}",
    params(
        ("collection" = String, Path, description = "products, teams, tours or courses"),
        ("id" = i64, Path, description = "Listing identifier"),
        ("kind" = String, Path, description = "bookmark, member or vote")
    ),
    responses(
        (status = 200, description = "Relation absent; repeat calls are no-ops.", body = RelationStateDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown collection, kind or listing.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Relations"
)]
pub async fn unset_relation(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((collection, id, kind)): Path<(String, String, String)>,
) -> HttpResult<Json<RelationStateDto>> {
    let listing = ListingRef::Id(parse_id(&id)?);
    change(&state, &user, &collection, listing, &kind, RelationOp::Unset).await
}
