//! Shared helpers for integration tests
//!
//! Each test gets its own temp work dir and a router identical to the
//! production one (auth middleware included).

use std::fs;

use axum::Router;
use axum::body::Body;
use bakehouse_server::{Config, ServerState, build_router};
use http::{Request, Response, header};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "admin12";

/// Build a production-shaped router over a temp work dir seeded with `menu_json`
pub fn test_app(dir: &TempDir, menu_json: Option<&str>) -> Router {
    if let Some(json) = menu_json {
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data").join("menu.json"), json).unwrap();
    }

    let mut config = Config::with_overrides(dir.path().to_str().unwrap(), 0);
    config.admin_password = TEST_PASSWORD.to_string();
    config.admin_password_hash = None;
    config.session_ttl_minutes = 60;

    let state = ServerState::initialize(&config).unwrap();
    build_router(state)
}

pub fn seed_two_categories() -> &'static str {
    r#"[
        {"name": "خبز", "categoreyImage": "bread.jpg", "items": [
            {"name": "مناقيش", "type": "قطعة", "price": "1,000", "size": "", "description": "", "productImage": ""}
        ]},
        {"name": "حلويات", "categoreyImage": "", "items": []}
    ]"#
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in and return a bearer token
pub async fn login(app: &Router) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(format!(
            r#"{{"password": "{TEST_PASSWORD}"}}"#
        )))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), http::StatusCode::OK);

    let json = body_json(response).await;
    json["data"]["token"].as_str().unwrap().to_string()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}
