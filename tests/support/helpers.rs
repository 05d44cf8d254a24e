// tests/support/helpers.rs
use super::mocks::{DummyTokenManager, FixedClock, InMemoryCatalog};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use campus_core::application::{
    ports::{security::TokenManager, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, ServiceDependencies},
};
use campus_core::domain::{
    listing::{ListingReadRepository, ListingWriteRepository},
    relation::RelationRepository,
    slug::SlugStore,
};
use campus_core::infrastructure::util::DefaultSlugGenerator;
use campus_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;

pub const DEFAULT_SLUG_ATTEMPTS: u32 = 3;

pub fn build_services(catalog: Arc<InMemoryCatalog>, max_slug_attempts: u32) -> ApplicationServices {
    let listing_write_repo: Arc<dyn ListingWriteRepository> = catalog.clone();
    let listing_read_repo: Arc<dyn ListingReadRepository> = catalog.clone();
    let slug_store: Arc<dyn SlugStore> = catalog.clone();
    let relation_repo: Arc<dyn RelationRepository> = catalog;
    let token_manager: Arc<dyn TokenManager> = Arc::new(DummyTokenManager);
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    ApplicationServices::new(ServiceDependencies {
        listing_write_repo,
        listing_read_repo,
        slug_store,
        relation_repo,
        token_manager,
        clock,
        slugger,
        max_slug_attempts,
    })
}

pub fn make_test_router(catalog: Arc<InMemoryCatalog>) -> axum::Router {
    let services = Arc::new(build_services(catalog, DEFAULT_SLUG_ATTEMPTS));
    build_router(HttpState { services }, RouterOptions::default())
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = read_json(resp).await;
    let error = json.get("error").and_then(Value::as_str).unwrap_or("");
    let message = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(error, expected_error, "unexpected error field: {json}");
    assert!(!message.is_empty(), "expected non-empty message in {json}");
}
