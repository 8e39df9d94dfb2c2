//! End-to-end tests for the composed users API router.
//!
//! Covers routing under `/api`, the health endpoint, docs and the JSON
//! fallback, on top of what the domain handler tests already check.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use core_config::{Environment, app_info, server::ServerConfig};
use domain_users::{MockUserRepository, User, UserService};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use users_api::{Config, build_app, build_app_with};

fn test_config() -> Config {
    Config {
        app: app_info!(),
        server: ServerConfig::default(),
        environment: Environment::Development,
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn create(name: &str, email: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "name": name, "email": email }).to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_app(&test_config());

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Server is running");
    assert_eq!(body["name"], "users_api");
}

#[tokio::test]
async fn test_user_lifecycle_scenario() {
    let app = build_app(&test_config());

    let (status, joao) = send(&app, create("João Silva", "joao@example.com")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(joao["id"], 1);

    let (status, maria) = send(&app, create("Maria Santos", "maria@example.com")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(maria["id"], 2);

    let (status, body) = send(&app, get("/api/users/1")).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: User = serde_json::from_value(body).unwrap();
    assert_eq!(
        fetched,
        User {
            id: 1,
            name: "João Silva".to_string(),
            email: "joao@example.com".to_string(),
        }
    );

    let (status, body) = send(&app, get("/api/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, get("/api/users/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_each_app_gets_its_own_store() {
    let first = build_app(&test_config());
    let second = build_app(&test_config());

    send(&first, create("João Silva", "joao@example.com")).await;

    let (_, body) = send(&second, get("/api/users")).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_payload_is_bad_request() {
    let app = build_app(&test_config());

    let (status, body) = send(&app, create("João Silva", "joao-at-example")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    let app = build_app(&test_config());

    let (status, body) = send(&app, get("/api/users/not-a-number")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_repository_failure_is_internal_error() {
    let service = UserService::new(MockUserRepository::new().with_error("disk on fire"));
    let app = build_app_with(&test_config(), service);

    let (status, body) = send(&app, get("/api/users")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "INTERNAL_ERROR");
    assert!(!body["message"].as_str().unwrap().contains("disk on fire"));
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = build_app(&test_config());

    let (status, body) = send(&app, get("/does-not-exist")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_openapi_document_lists_user_paths() {
    let app = build_app(&test_config());

    let (status, body) = send(&app, get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/users"));
    assert!(paths.contains_key("/users/{id}"));
}
