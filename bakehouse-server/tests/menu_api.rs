//! Menu CRUD over the wire
//!
//! Drives the composed router (auth middleware included) against a temp
//! work dir, exercising the positional-index semantics end to end.

mod common;

use axum::body::Body;
use common::{body_json, get, json_request, login, seed_two_categories, test_app};
use http::{Request, StatusCode};
use tempfile::TempDir;
use tower::ServiceExt;

#[tokio::test]
async fn get_menu_returns_bare_category_array() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir, Some(seed_two_categories()));

    let response = app.oneshot(get("/api/menu")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let categories = json.as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["name"], "خبز");
    assert_eq!(categories[0]["categoreyImage"], "bread.jpg");
    assert_eq!(categories[0]["items"][0]["price"], "1,000");
}

#[tokio::test]
async fn get_menu_with_missing_file_is_a_generic_500() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir, None);

    let response = app.oneshot(get("/api/menu")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to read data");
}

#[tokio::test]
async fn post_category_appears_last_with_empty_items() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir, Some(seed_two_categories()));
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/menu",
            Some(&token),
            r#"{"type": "category", "name": "موسمي"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[2]["name"], "موسمي");
    assert_eq!(data[2]["categoreyImage"], "");
    assert_eq!(data[2]["items"].as_array().unwrap().len(), 0);

    // Visible through a subsequent GET, i.e. actually persisted
    let response = app.oneshot(get("/api/menu")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn post_item_with_out_of_range_index_succeeds_without_change() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir, Some(seed_two_categories()));
    let token = login(&app).await;

    let before = body_json(app.clone().oneshot(get("/api/menu")).await.unwrap()).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/menu",
            Some(&token),
            r#"{"type": "item", "categoryIndex": 99, "name": "كرواسان", "price": "1,500"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let after = body_json(app.oneshot(get("/api/menu")).await.unwrap()).await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn post_item_applies_defaults() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir, Some(seed_two_categories()));
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/menu",
            Some(&token),
            r#"{"type": "item", "categoryIndex": 1, "name": "بقلاوة", "price": "3,000"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let item = &json["data"][1]["items"][0];
    assert_eq!(item["name"], "بقلاوة");
    assert_eq!(item["type"], "قطعة");
    assert_eq!(item["size"], "");
    assert_eq!(item["productImage"], "");
}

#[tokio::test]
async fn put_category_with_only_name_keeps_image() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir, Some(seed_two_categories()));
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/menu",
            Some(&token),
            r#"{"type": "category", "categoryIndex": 0, "name": "مخبوزات"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"][0]["name"], "مخبوزات");
    assert_eq!(json["data"][0]["categoreyImage"], "bread.jpg");
}

#[tokio::test]
async fn delete_category_shifts_subsequent_indices() {
    let dir = TempDir::new().unwrap();
    let seed = r#"[
        {"name": "صفر", "categoreyImage": "", "items": []},
        {"name": "واحد", "categoreyImage": "", "items": []},
        {"name": "اثنان", "categoreyImage": "", "items": []}
    ]"#;
    let app = test_app(&dir, Some(seed));
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            "/api/menu?categoryIndex=1",
            Some(&token),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    // Former index 2 now lives at index 1
    assert_eq!(data[1]["name"], "اثنان");
}

#[tokio::test]
async fn delete_with_both_indices_removes_one_item() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir, Some(seed_two_categories()));
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            "/api/menu?categoryIndex=0&itemIndex=0",
            Some(&token),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"][0]["items"].as_array().unwrap().len(), 0);
    // The category itself survives
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_without_category_index_is_rejected() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir, Some(seed_two_categories()));
    let token = login(&app).await;

    let response = app
        .oneshot(json_request("DELETE", "/api/menu", Some(&token), ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "categoryIndex required");
}

#[tokio::test]
async fn mutations_preserve_the_misspelled_image_key_on_disk() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir, Some("[]"));
    let token = login(&app).await;

    let request: Request<Body> = json_request(
        "POST",
        "/api/menu",
        Some(&token),
        r#"{"type": "category", "name": "خبز", "categoreyImage": "bread.jpg"}"#,
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let raw = std::fs::read_to_string(dir.path().join("data").join("menu.json")).unwrap();
    assert!(raw.contains("categoreyImage"));
    assert!(!raw.contains("category_image"));
}
