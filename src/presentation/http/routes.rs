// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, listings, relations},
    middleware::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Knobs that differ between the server binary and tests.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    /// Needs the peer address, so the service must be built with connect info.
    pub rate_limit: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".into()],
            rate_limit: false,
        }
    }
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let mut api = Router::new()
        .route("/api/v1/auth/keys", get(auth::public_keys))
        .route(
            "/api/v1/{collection}",
            get(listings::list_listings).post(listings::create_listing),
        )
        .route(
            "/api/v1/{collection}/slug-preview",
            get(listings::preview_slug),
        )
        .route(
            "/api/v1/{collection}/by-slug/{slug}",
            get(listings::get_listing_by_slug),
        )
        .route(
            "/api/v1/{collection}/by-slug/{slug}/{kind}/toggle",
            post(relations::toggle_by_slug),
        )
        .route(
            "/api/v1/{collection}/{id}",
            get(listings::get_listing)
                .put(listings::update_listing)
                .delete(listings::delete_listing),
        )
        .route(
            "/api/v1/{collection}/{id}/{kind}",
            put(relations::set_relation).delete(relations::unset_relation),
        )
        .route(
            "/api/v1/{collection}/{id}/{kind}/toggle",
            post(relations::toggle_by_id),
        );

    if options.rate_limit {
        api = api.layer(rate_limit_layer());
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security([]),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
