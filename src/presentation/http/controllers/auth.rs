// src/presentation/http/controllers/auth.rs
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

/// Verification key for session tokens, so that peers can check them offline.
#[utoipa::path(
    get,
    path = "/api/v1/auth/keys",
    responses(
        (status = 200, description = "JWK set holding the Ed25519 public key.", body = serde_json::Value),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Auth"
)]
pub async fn public_keys(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .token_manager()
        .public_jwk()
        .await
        .into_http()
        .map(Json)
}
