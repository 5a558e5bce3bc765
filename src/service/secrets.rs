//! Credential hashing and card redaction.

use crate::config::FieldDef;
use crate::error::{AppError, INTERNAL_MESSAGE};
use serde_json::{Map, Value};

/// Last four characters of a card number, or empty when unknown or too short.
pub fn card_last4(card: Option<&str>) -> String {
    match card {
        Some(c) if c.chars().count() >= 4 => {
            let skip = c.chars().count() - 4;
            c.chars().skip(skip).collect()
        }
        _ => String::new(),
    }
}

/// Opaque stand-in for a processor token.
pub fn card_token() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("tok_{}", &id[..13])
}

pub const CARD_NUMBER_FIELD: &str = "cardNo";

/// Replace raw card data with its last four digits and a token. CVV and expiry are dropped.
pub fn redact_card(body: &mut Map<String, Value>) {
    let card = body.remove(CARD_NUMBER_FIELD);
    let card = card.as_ref().and_then(|v| match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    });
    for key in ["cvv", "expiryDate", "cardLast4", "cardToken"] {
        body.remove(key);
    }
    body.insert("cardLast4".into(), Value::String(card_last4(card.as_deref())));
    body.insert("cardToken".into(), Value::String(card_token()));
}

/// bcrypt is CPU-bound, so it runs on the blocking pool.
pub async fn hash_password(plain: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
        .await
        .map_err(|e| AppError::Internal(format!("password hashing task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))
}

pub async fn verify_password(plain: String, hash: String) -> Result<bool, AppError> {
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("password verification task failed: {}", e)))?;
    // A malformed stored hash cannot match any password.
    Ok(verified.unwrap_or(false))
}

/// Hash every non-blank secret among `fields` in place.
pub async fn hash_secrets(
    fields: Vec<&'static FieldDef>,
    body: &mut Map<String, Value>,
    cost: u32,
) -> Result<(), AppError> {
    for f in fields.into_iter().filter(|f| f.secret) {
        let plain = match body.get(f.field) {
            v if f.is_blank(v) => continue,
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => continue,
        };
        let hashed = hash_password(plain, cost).await.map_err(|e| {
            tracing::error!(field = f.field, error = %e, "hashing failed");
            AppError::Internal(INTERNAL_MESSAGE.into())
        })?;
        body.insert(f.field.to_string(), Value::String(hashed));
    }
    Ok(())
}
