//! Handler tests for Users domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the users domain handlers,
//! not the full application with routing, middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_user_handler_returns_200() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "gopher",
                "email": "gopher@kaliningrad.ru"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let user: User = json_body(response.into_body()).await;
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "gopher");
    assert_eq!(user.email, "gopher@kaliningrad.ru");
}

#[tokio::test]
async fn test_create_user_handler_rejects_malformed_json() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_handler_rejects_missing_field() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let app = handlers::router(service);

    // No email field at all
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "name": "gopher" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_handler_rejects_empty_name() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "",
                "email": "gopher@kaliningrad.ru"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_handler_allows_any_nonempty_email() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let app = handlers::router(service);

    // Email format is not enforced at this boundary, only non-emptiness
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "gopher",
                "email": "x"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let user: User = json_body(response.into_body()).await;
    assert_eq!(user.email, "x");
}

#[tokio::test]
async fn test_get_user_handler_returns_200() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);

    let created = service
        .create_user("gopher", "gopher@kaliningrad.ru")
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let user: User = json_body(response.into_body()).await;
    assert_eq!(user, created);
}

#[tokio::test]
async fn test_get_user_handler_returns_404_for_missing() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/99")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "User 99 not found");
}

#[tokio::test]
async fn test_get_user_handler_rejects_non_numeric_id() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/abc")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_email_handler_returns_200() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);

    let created = service
        .create_user("gopher", "gopher@kaliningrad.ru")
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("PUT")
        .uri("/email")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "user_id": created.id,
                "email": "newgopher@kaliningrad.ru"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let user: User = json_body(response.into_body()).await;
    assert_eq!(user.id, created.id);
    assert_eq!(user.name, "gopher");
    assert_eq!(user.email, "newgopher@kaliningrad.ru");
}

#[tokio::test]
async fn test_update_email_handler_returns_404_for_missing() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let app = handlers::router(service);

    let request = Request::builder()
        .method("PUT")
        .uri("/email")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "user_id": 99,
                "email": "newgopher@kaliningrad.ru"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_email_handler_rejects_zero_user_id() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let app = handlers::router(service);

    // Zero is never a persisted id
    let request = Request::builder()
        .method("PUT")
        .uri("/email")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "user_id": 0,
                "email": "newgopher@kaliningrad.ru"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_user_handler_returns_200_with_empty_body() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);

    let created = service
        .create_user("gopher", "gopher@kaliningrad.ru")
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("DELETE")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "user_id": created.id })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_delete_user_handler_returns_404_for_missing() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);
    let app = handlers::router(service);

    let request = Request::builder()
        .method("DELETE")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "user_id": 99 })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_user_is_gone() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo);

    let created = service
        .create_user("gopher", "gopher@kaliningrad.ru")
        .await
        .unwrap();
    service.delete_user(created.id).await.unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
