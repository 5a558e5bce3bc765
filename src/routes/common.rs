//! Common routes: health, readiness, version and the database probe.

use crate::response::Envelope;
use crate::service::row_to_json;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(e) = sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

async fn version() -> Json<Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /api/test`: current database time inside the usual envelope.
async fn db_probe(State(state): State<AppState>) -> Envelope<Value> {
    match sqlx::query(r#"SELECT NOW() AS "currentTime""#).fetch_one(&state.pool).await {
        Ok(row) => Envelope::ok("DB connection OK.", row_to_json(&row)),
        Err(e) => {
            tracing::error!(error = %e, "database probe failed");
            Envelope::fail(format!("DB connection failed: {}", e))
        }
    }
}

/// GET /health, /ready, /version and /api/test.
pub fn common_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/api/test", get(db_probe))
}
