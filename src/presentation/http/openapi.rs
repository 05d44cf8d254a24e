// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";
const LOCAL_SERVER: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::public_keys,
        crate::presentation::http::controllers::listings::list_listings,
        crate::presentation::http::controllers::listings::create_listing,
        crate::presentation::http::controllers::listings::preview_slug,
        crate::presentation::http::controllers::listings::get_listing_by_slug,
        crate::presentation::http::controllers::listings::get_listing,
        crate::presentation::http::controllers::listings::update_listing,
        crate::presentation::http::controllers::listings::delete_listing,
        crate::presentation::http::controllers::relations::toggle_by_id,
        crate::presentation::http::controllers::relations::toggle_by_slug,
        crate::presentation::http::controllers::relations::set_relation,
        crate::presentation::http::controllers::relations::unset_relation,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::listings::CreateListingRequest,
            crate::presentation::http::controllers::listings::UpdateListingRequest,
            crate::application::dto::ListingDto,
            crate::application::dto::ListingPage,
            crate::application::dto::SlugPreviewDto,
            crate::application::dto::RelationStateDto
        )
    ),
    tags(
        (name = "Auth", description = "Session key distribution"),
        (name = "Listings", description = "Products, teams, tours and courses"),
        (name = "Relations", description = "Bookmarks, memberships and votes"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Campus API",
        description = "Listings with unique slugs and atomic relation toggles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();
        urls.push(LOCAL_SERVER.to_string());

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`), Redoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    write_openapi_snapshot_to(Path::new(&snapshot_path()))
}

pub fn write_openapi_snapshot_to(path: &Path) -> std::io::Result<()> {
    let doc = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
