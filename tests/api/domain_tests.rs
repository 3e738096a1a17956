//! Domain API Tests
//!
//! Drives the full router (handlers, facade, service) against the in-memory
//! repository.

use axum::http::StatusCode;

use crate::common::{read_json, TestApp};

#[tokio::test]
async fn test_create_domain_returns_201_with_assigned_fields() {
    let app = TestApp::new();

    let response = app
        .post_json("/domains", r#"{"name":"payments","description":"Payment config"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "payments");
    assert_eq!(body["description"], "Payment config");
    assert!(body["createdAt"].is_string());
    assert!(body.get("createdByUserId").is_none());
}

#[tokio::test]
async fn test_create_duplicate_name_returns_409_and_writes_no_row() {
    let app = TestApp::new();

    let first = app.post_json("/domains", r#"{"name":"A"}"#).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.post_json("/domains", r#"{"name":"A"}"#).await;

    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(app.repository.row_count(), 1);

    let body = read_json(second).await;
    assert_eq!(body["status"], 409);
    assert_eq!(body["error"], "Conflict");
    assert!(body["details"].is_null());
}

#[tokio::test]
async fn test_create_with_blank_name_returns_400() {
    let app = TestApp::new();

    let response = app.post_json("/domains", r#"{"name":"   "}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.repository.row_count(), 0);

    let body = read_json(response).await;
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["message"], "Name is required");
}

#[tokio::test]
async fn test_create_with_missing_name_returns_400() {
    let app = TestApp::new();

    let response = app.post_json("/domains", r#"{"description":"orphan"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.repository.row_count(), 0);
}

#[tokio::test]
async fn test_get_domain_round_trips_created_entity() {
    let app = TestApp::new();

    let created = read_json(
        app.post_json("/domains", r#"{"name":"billing","description":"d"}"#)
            .await,
    )
    .await;

    let response = app.get(&format!("/domains/{}", created["id"])).await;

    assert_eq!(response.status(), StatusCode::OK);
    let fetched = read_json(response).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_domain_returns_404() {
    let app = TestApp::new();

    let response = app.get("/domains/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_update_missing_domain_returns_404() {
    let app = TestApp::new();

    let response = app.put_json("/domains/42", r#"{"name":"B"}"#).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_blank_name_returns_400() {
    let app = TestApp::new();
    app.post_json("/domains", r#"{"name":"A"}"#).await;

    let response = app.put_json("/domains/1", r#"{"name":""}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_to_taken_name_returns_409() {
    let app = TestApp::new();
    app.post_json("/domains", r#"{"name":"A"}"#).await;
    app.post_json("/domains", r#"{"name":"B"}"#).await;

    let response = app.put_json("/domains/2", r#"{"name":"A"}"#).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_missing_domain_returns_404() {
    let app = TestApp::new();

    let response = app.delete("/domains/7").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_crud_lifecycle() {
    let app = TestApp::new();

    // Create {name:"A"} -> 201, id=1
    let created = app.post_json("/domains", r#"{"name":"A"}"#).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = read_json(created).await;
    assert_eq!(created["id"], 1);

    // Create {name:"A"} again -> 409, table still has 1 row
    let duplicate = app.post_json("/domains", r#"{"name":"A"}"#).await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
    assert_eq!(app.repository.row_count(), 1);

    // Update id=1 to {name:"B"} -> 200
    let updated = app.put_json("/domains/1", r#"{"name":"B"}"#).await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = read_json(updated).await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["name"], "B");

    // Get id=1 -> {id:1, name:"B"}
    let fetched = read_json(app.get("/domains/1").await).await;
    assert_eq!(fetched["id"], 1);
    assert_eq!(fetched["name"], "B");

    // Delete id=1 -> 204
    let deleted = app.delete("/domains/1").await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    // Get id=1 -> 404
    let missing = app.get("/domains/1").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_domains_defaults_to_first_page() {
    let app = TestApp::new();
    app.post_json("/domains", r#"{"name":"A"}"#).await;
    app.post_json("/domains", r#"{"name":"B"}"#).await;

    let response = app.get("/domains").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["page"], 0);
    assert_eq!(body["size"], 20);
    assert_eq!(body["totalItems"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_pagination_windows_are_consistent() {
    let app = TestApp::new();
    app.post_json("/domains", r#"{"name":"A"}"#).await;
    app.post_json("/domains", r#"{"name":"B"}"#).await;

    // getPage(0,1) -> items=[row1], totalItems=2
    let first = read_json(app.get("/domains?page=0&size=1").await).await;
    assert_eq!(first["items"].as_array().unwrap().len(), 1);
    assert_eq!(first["items"][0]["id"], 1);
    assert_eq!(first["totalItems"], 2);

    // getPage(1,1) -> items=[row2], totalItems=2
    let second = read_json(app.get("/domains?page=1&size=1").await).await;
    assert_eq!(second["items"].as_array().unwrap().len(), 1);
    assert_eq!(second["items"][0]["id"], 2);
    assert_eq!(second["totalItems"], 2);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty_with_full_count() {
    let app = TestApp::new();
    app.post_json("/domains", r#"{"name":"A"}"#).await;

    let body = read_json(app.get("/domains?page=5&size=10").await).await;

    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["totalItems"], 1);
}

#[tokio::test]
async fn test_list_rejects_negative_page() {
    let app = TestApp::new();

    let response = app.get("/domains?page=-1&size=10").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_rejects_non_positive_size() {
    let app = TestApp::new();

    let response = app.get("/domains?page=0&size=0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_items_are_ordered_ascending_by_id() {
    let app = TestApp::new();
    for name in ["C", "A", "B"] {
        app.post_json("/domains", &format!(r#"{{"name":"{}"}}"#, name))
            .await;
    }

    let body = read_json(app.get("/domains?page=0&size=10").await).await;
    let ids: Vec<i64> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();

    assert_eq!(ids, vec![1, 2, 3]);
}
