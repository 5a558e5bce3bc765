#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use bizdesk_api::{app, catalog, AppConfig, AppState};
use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tower::ServiceExt;

/// Router over a pool that never connects unless a handler reaches the database.
pub fn offline_app() -> Router {
    let config = AppConfig {
        acquire_timeout: Duration::from_millis(200),
        bcrypt_cost: 4,
        body_limit_bytes: 1024,
        ..AppConfig::default()
    };
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy("postgres://localhost/bizdesk_offline")
        .unwrap();
    app(AppState::new(pool, catalog().unwrap(), config))
}

/// Router over `TEST_DATABASE_URL` with the schema applied, or `None` when unset.
pub async fn database_app() -> Option<Router> {
    database_app_with(2).await.map(|(app, _)| app)
}

/// Same as `database_app`, with a pool of `max_connections` that is also returned for direct checks.
pub async fn database_app_with(max_connections: u32) -> Option<(Router, PgPool)> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let config = AppConfig {
        database_url: url.clone(),
        bcrypt_cost: 4,
        ..AppConfig::default()
    };
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&url)
        .await
        .unwrap();
    let catalog = catalog().unwrap();
    // Concurrent CREATE TABLE IF NOT EXISTS from parallel tests can collide; the retry sees the tables.
    let mut attempts = 0;
    while let Err(e) = bizdesk_api::apply_schema(&pool, &catalog).await {
        attempts += 1;
        assert!(attempts < 3, "schema bootstrap failed: {}", e);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    Some((app(AppState::new(pool.clone(), catalog, config)), pool))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if body.is_some() {
        req = req.header("content-type", "application/json");
    }
    let req = req
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub fn assert_fail(value: &Value, message: &str) {
    assert_eq!(value["success"], Value::Bool(false), "{}", value);
    assert_eq!(value["message"], message, "{}", value);
}
