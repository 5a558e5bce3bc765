//! Customer account endpoints beyond plain CRUD: register alias and login.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::handlers::entity;
use crate::resources::pos::{ACTIVE_STATUS, CUSTOMERS, LOGIN_FIELD};
use crate::response::Envelope;
use crate::service::secrets::verify_password;
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::State;
use serde_json::{json, Value};

pub const LOGIN_MISSING_MESSAGE: &str = "Missing email or password.";
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password.";
pub const INACTIVE_MESSAGE: &str = "Account is not active.";
pub const LOGIN_OK_MESSAGE: &str = "Login successful.";

/// `POST /api/pos/register`: same contract as `POST /api/pos/customers`.
pub async fn register(State(state): State<AppState>, JsonBody(body): JsonBody) -> Result<Envelope<Value>, AppError> {
    entity::create(state, &CUSTOMERS, body).await
}

/// `POST /api/pos/login`: verify a username and password against the stored bcrypt hash.
pub async fn login(State(state): State<AppState>, JsonBody(body): JsonBody) -> Result<Envelope<Value>, AppError> {
    let username = body.get(LOGIN_FIELD).and_then(Value::as_str).unwrap_or_default();
    let password = body.get("password").and_then(Value::as_str).unwrap_or_default();
    if username.is_empty() || password.is_empty() {
        return Err(AppError::Validation(LOGIN_MISSING_MESSAGE.into()));
    }

    let Some(lookup) = CUSTOMERS.field(LOGIN_FIELD) else {
        return Err(AppError::Internal(crate::error::INTERNAL_MESSAGE.into()));
    };
    let Some(mut user) = CrudService::find_with_secrets(&state.pool, &CUSTOMERS, lookup, json!(username)).await? else {
        tracing::info!(username, "login for unknown account");
        return Err(AppError::Validation(LOGIN_FAILED_MESSAGE.into()));
    };

    let mut stored_hash = String::new();
    if let Some(obj) = user.as_object_mut() {
        for f in CUSTOMERS.fields.iter().filter(|f| f.secret) {
            if let Some(Value::String(h)) = obj.remove(f.column) {
                stored_hash = h;
            }
        }
    }
    if !verify_password(password.to_string(), stored_hash).await? {
        tracing::info!(username, "login with wrong password");
        return Err(AppError::Validation(LOGIN_FAILED_MESSAGE.into()));
    }

    let status = CUSTOMERS
        .field("status")
        .and_then(|f| user.get(f.column))
        .and_then(Value::as_str)
        .unwrap_or_default();
    if status != ACTIVE_STATUS {
        return Err(AppError::Validation(INACTIVE_MESSAGE.into()));
    }

    Ok(Envelope::ok(LOGIN_OK_MESSAGE, json!({ "user": user })))
}
