//! HTTP tests for the user routes.
//!
//! The router runs against the real registry over an in-memory store, so no
//! database connection is required.

mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use user_registry::api::{create_router, AppState};

use common::registry;

fn app() -> Router {
    let (service, _) = registry();
    create_router(AppState::new(Arc::new(service)))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn user_body(n: usize) -> Value {
    json!({
        "firstName": format!("First{}", n),
        "lastName": format!("Last{}", n),
        "gender": "female",
        "dateOfBirth": "1990-01-15",
        "email": format!("user{}@example.com", n),
        "phoneNumber": "1234567890",
        "location": "Store A"
    })
}

#[tokio::test]
async fn test_health() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_returns_created_user() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/v1/users", Some(user_body(1))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "user1@example.com");
    assert_eq!(body["gender"], "female");
    assert!(body["createdAt"].is_string());
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test]
async fn test_create_duplicate_email_is_409() {
    let app = app();
    send(&app, Method::POST, "/v1/users", Some(user_body(1))).await;

    let (status, body) = send(&app, Method::POST, "/v1/users", Some(user_body(1))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(
        body["error"]["message"],
        "User with email user1@example.com already exists"
    );
}

#[tokio::test]
async fn test_create_rejects_malformed_fields() {
    let app = app();

    let mut bad_phone = user_body(1);
    bad_phone["phoneNumber"] = json!("12-345");
    let (status, body) = send(&app, Method::POST, "/v1/users", Some(bad_phone)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let mut bad_gender = user_body(2);
    bad_gender["gender"] = json!("robot");
    let (status, _) = send(&app, Method::POST, "/v1/users", Some(bad_gender)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut missing = user_body(3);
    missing.as_object_mut().unwrap().remove("email");
    let (status, _) = send(&app, Method::POST, "/v1/users", Some(missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_uses_default_window() {
    let app = app();
    for n in 1..=8 {
        send(&app, Method::POST, "/v1/users", Some(user_body(n))).await;
    }

    let (status, body) = send(&app, Method::GET, "/v1/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(
        body["pagination"],
        json!({"page": 1, "limit": 5, "totalItems": 8, "totalPages": 2})
    );

    let (_, body) = send(&app, Method::GET, "/v1/users?page=2&limit=5", None).await;
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![6, 7, 8]);
}

#[tokio::test]
async fn test_list_rejects_out_of_range_query() {
    let app = app();

    let uris = [
        "/v1/users?limit=101",
        "/v1/users?limit=0",
        "/v1/users?page=0",
        "/v1/users?page=x",
    ];
    for uri in uris {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR", "{}", uri);
    }
}

#[tokio::test]
async fn test_list_huge_page_is_empty() {
    let app = app();
    send(&app, Method::POST, "/v1/users", Some(user_body(1))).await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/v1/users?page=4611686018427387904&limit=5",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["totalItems"], 1);
    assert_eq!(body["pagination"]["totalPages"], 1);
}

#[tokio::test]
async fn test_get_missing_user_is_404() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/v1/users/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "User with ID 999 not found");
}

#[tokio::test]
async fn test_get_non_numeric_id_is_400() {
    let app = app();

    let (status, _) = send(&app, Method::GET, "/v1/users/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_updates_only_supplied_fields() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/v1/users", Some(user_body(1))).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/v1/users/1",
        Some(json!({"location": "Store B"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "Store B");
    assert_eq!(body["firstName"], created["firstName"]);
    assert_eq!(body["email"], created["email"]);
    assert_eq!(body["createdAt"], created["createdAt"]);
    assert_ne!(body["updatedAt"], created["updatedAt"]);
}

#[tokio::test]
async fn test_patch_rejects_unknown_field() {
    let app = app();
    send(&app, Method::POST, "/v1/users", Some(user_body(1))).await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/v1/users/1",
        Some(json!({"nickname": "ace"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_email_taken_is_409() {
    let app = app();
    send(&app, Method::POST, "/v1/users", Some(user_body(1))).await;
    send(&app, Method::POST, "/v1/users", Some(user_body(2))).await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/v1/users/1",
        Some(json!({"email": "user2@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/v1/users/1",
        Some(json!({"email": "user1@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_then_get() {
    let app = app();
    send(&app, Method::POST, "/v1/users", Some(user_body(1))).await;

    let (status, body) = send(&app, Method::DELETE, "/v1/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, "/v1/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/v1/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_lists_user_routes() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/v1/users"].is_object());
    assert!(body["paths"]["/v1/users/{id}"].is_object());
}
