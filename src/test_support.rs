//! Request helpers shared by the router tests.

use axum::{
    body::{to_bytes, Body},
    extract::FromRef,
    http::{header, Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt; // for .oneshot()
use uuid::Uuid;

use crate::app::build_app;
use crate::auth::{claims::Role, jwt::JwtKeys};
use crate::state::AppState;

/// Access token for a random subject.
pub fn token(state: &AppState, role: Role) -> String {
    JwtKeys::from_ref(state)
        .sign_access(Uuid::new_v4(), role)
        .unwrap()
}

/// Sends one request through the full router. Non-JSON bodies come back as a string.
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send_raw(state, method, uri, bearer, body.map(|b| b.to_string())).await
}

pub async fn send_raw(
    state: &AppState,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<String>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = bearer {
        req = req.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    let req = match body {
        Some(b) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(b))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    let res = build_app(state.clone()).oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, json)
}

/// Registers a user and returns `(access_token, refresh_token, user_id)`.
pub async fn register_user(state: &AppState, email: &str) -> (String, String, Uuid) {
    let (status, body) = send(
        state,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(serde_json::json!({ "name": "Asha", "email": email, "password": "longenough" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let id = body["user"]["id"].as_str().unwrap().parse().unwrap();
    (
        body["access_token"].as_str().unwrap().to_string(),
        body["refresh_token"].as_str().unwrap().to_string(),
        id,
    )
}

/// Registers an admin with the test signup key and returns its access token.
pub async fn register_admin(state: &AppState, username: &str) -> String {
    let (status, body) = send(
        state,
        "POST",
        "/api/v1/admin/register",
        None,
        Some(serde_json::json!({
            "username": username,
            "password": "longenough",
            "signup_key": "test-admin-key",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["access_token"].as_str().unwrap().to_string()
}
