//! JSON object body that reports failures as envelopes instead of axum's plain-text rejections.

use crate::error::AppError;
use crate::service::body_to_map;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde_json::{Map, Value};

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body.";

/// Request body as a JSON object. An empty body is an empty object.
#[derive(Clone, Debug, Default)]
pub struct JsonBody(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rej| AppError::Transport {
                status: rej.status(),
                message: rej.body_text(),
            })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Map::new()));
        }
        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "rejected request body");
            AppError::Transport {
                status: StatusCode::BAD_REQUEST,
                message: INVALID_JSON_MESSAGE.into(),
            }
        })?;
        Ok(JsonBody(body_to_map(value)?))
    }
}
