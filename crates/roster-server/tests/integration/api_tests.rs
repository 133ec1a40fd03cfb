use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::integration::common::{assert_json, body_bytes, body_json, setup_test_app};

#[tokio::test]
async fn list_returns_seeded_users_in_order() {
    let app = setup_test_app();

    let response = app.get("/users").await;

    assert_json(
        response,
        StatusCode::OK,
        json!([
            {"id": 1, "name": "John Doe", "email": "john.doe@example.com"},
            {"id": 2, "name": "Jane Smith", "email": "jane.smith@example.com"},
        ]),
    )
    .await;
}

#[tokio::test]
async fn get_existing_user() {
    let app = setup_test_app();

    let response = app.get("/users/2").await;

    assert_json(
        response,
        StatusCode::OK,
        json!({"id": 2, "name": "Jane Smith", "email": "jane.smith@example.com"}),
    )
    .await;
}

#[tokio::test]
async fn get_missing_user_returns_404_message() {
    let app = setup_test_app();

    let response = app.get("/users/99").await;

    assert_json(
        response,
        StatusCode::NOT_FOUND,
        json!("User with ID 99 was not found."),
    )
    .await;
}

#[tokio::test]
async fn get_with_non_integer_id_returns_400() {
    let app = setup_test_app();

    let response = app.get("/users/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await.is_string());
}

#[tokio::test]
async fn create_user_assigns_id_and_location() {
    let app = setup_test_app();

    let response = app
        .send_json(
            "POST",
            "/users",
            json!({"id": 500, "name": "Ada Lovelace", "email": "ada@example.com"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()["location"], "/users/3");
    assert_eq!(
        body_json(response).await,
        json!({"id": 3, "name": "Ada Lovelace", "email": "ada@example.com"})
    );

    let response = app.get("/users/3").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.state.users.len().await, 3);
}

#[tokio::test]
async fn create_with_blank_name_returns_400() {
    let app = setup_test_app();

    let response = app
        .send_json("POST", "/users", json!({"name": "", "email": "a@b.com"}))
        .await;

    assert_json(response, StatusCode::BAD_REQUEST, json!("Name is required.")).await;
    assert_eq!(app.state.users.len().await, 2);
}

#[tokio::test]
async fn create_with_bad_email_returns_400() {
    let app = setup_test_app();

    let response = app
        .send_json("POST", "/users", json!({"name": "X", "email": "bad"}))
        .await;

    assert_json(
        response,
        StatusCode::BAD_REQUEST,
        json!("Invalid email format."),
    )
    .await;
}

#[tokio::test]
async fn create_with_missing_fields_reports_name_first() {
    let app = setup_test_app();

    let response = app.send_json("POST", "/users", json!({})).await;

    assert_json(response, StatusCode::BAD_REQUEST, json!("Name is required.")).await;
}

#[tokio::test]
async fn create_with_malformed_json_returns_400() {
    let app = setup_test_app();

    let response = app
        .send(
            Request::post("/users")
                .header("authorization", "Bearer valid-token")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await.is_string());
}

#[tokio::test]
async fn update_overwrites_name_and_email_only() {
    let app = setup_test_app();

    let response = app
        .send_json(
            "PUT",
            "/users/1",
            json!({"id": 77, "name": "Johnny", "email": "johnny@example.com"}),
        )
        .await;

    assert_json(
        response,
        StatusCode::OK,
        json!({"id": 1, "name": "Johnny", "email": "johnny@example.com"}),
    )
    .await;

    let response = app.get("/users").await;
    let users = body_json(response).await;
    assert_eq!(users[0]["name"], "Johnny");
    assert_eq!(users[1]["name"], "Jane Smith");
}

#[tokio::test]
async fn update_missing_user_returns_404() {
    let app = setup_test_app();

    let response = app
        .send_json("PUT", "/users/42", json!({"name": "X", "email": "x@y.z"}))
        .await;

    assert_json(
        response,
        StatusCode::NOT_FOUND,
        json!("User with ID 42 was not found."),
    )
    .await;
}

#[tokio::test]
async fn update_missing_user_with_bad_body_still_returns_404() {
    let app = setup_test_app();

    let response = app
        .send_json("PUT", "/users/42", json!({"name": "", "email": "bad"}))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_invalid_body_returns_400_and_keeps_record() {
    let app = setup_test_app();

    let response = app
        .send_json("PUT", "/users/2", json!({"name": "Jane", "email": "jane"}))
        .await;

    assert_json(
        response,
        StatusCode::BAD_REQUEST,
        json!("Invalid email format."),
    )
    .await;

    let user = app.state.users.find_by_id(2).await.unwrap();
    assert_eq!(user.email, "jane.smith@example.com");
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = setup_test_app();

    let response = app.delete("/users/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = app.get("/users/1").await;
    assert_json(
        response,
        StatusCode::NOT_FOUND,
        json!("User with ID 1 was not found."),
    )
    .await;
}

#[tokio::test]
async fn delete_missing_user_returns_404() {
    let app = setup_test_app();

    let response = app.delete("/users/99").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.state.users.len().await, 2);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let app = setup_test_app();

    app.delete("/users/2").await;
    let response = app
        .send_json("POST", "/users", json!({"name": "New", "email": "new@example.com"}))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["id"], 3);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = setup_test_app();

    let response = app.get("/nope").await;

    assert_json(response, StatusCode::NOT_FOUND, json!("Not found.")).await;
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let app = setup_test_app();

    let requests = (0..20).map(|i| {
        app.send_json(
            "POST",
            "/users",
            json!({"name": format!("User {i}"), "email": "u@example.com"}),
        )
    });
    let responses = futures::future::join_all(requests).await;

    let mut ids = Vec::new();
    for response in responses {
        assert_eq!(response.status(), StatusCode::CREATED);
        ids.push(body_json(response).await["id"].as_i64().unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);
    assert_eq!(app.state.users.len().await, 22);
}
