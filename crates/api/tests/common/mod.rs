//! Shared helpers for the HTTP integration tests.
//!
//! Every test builds the production router over a fresh [`MemoryStore`] and
//! drives it with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use harva_api::auth::jwt::{generate_access_token, JwtConfig};
use harva_api::auth::password::hash_password;
use harva_api::config::{ServerConfig, StoreBackend};
use harva_api::router::build_app_router;
use harva_api::state::AppState;
use harva_core::types::RowId;
use harva_db::models::user::{CmsUser, CreateUser};
use harva_db::repositories::UserRepo;
use harva_db::store::MemoryStore;

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults and the memory backend.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 60,
        },
        admin: None,
    }
}

/// Build the full application router over a fresh memory store.
///
/// The store is returned as well so tests can seed rows, inspect what a
/// request wrote, and schedule failures.
pub fn build_test_app() -> (Router, Arc<MemoryStore>) {
    let config = test_config();
    let store = Arc::new(MemoryStore::new());

    let state = AppState {
        store: store.clone(),
        pool: None,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config).expect("test config is valid");
    (app, store)
}

/// Mint an access token for an arbitrary role without a stored user.
pub fn token_for(role: &str) -> String {
    generate_access_token(
        RowId::new_v4(),
        &format!("{role}@harva.test"),
        role,
        &test_config().jwt,
    )
    .expect("token generation should succeed")
}

/// Store a user whose password is [`TEST_PASSWORD`].
pub async fn create_user(store: &MemoryStore, email: &str, role: &str) -> CmsUser {
    let input = CreateUser {
        email: email.to_string(),
        full_name: Some("Test User".to_string()),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        role: role.to_string(),
    };
    UserRepo::create(store, &input)
        .await
        .expect("user creation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
