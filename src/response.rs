//! Uniform `{success, message, data}` envelope returned by every route.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    /// Serialized as `null` when absent.
    pub data: Option<T>,
}

pub fn respond<T>(success: bool, message: impl Into<String>, data: Option<T>) -> Envelope<T> {
    Envelope {
        success,
        message: message.into(),
        data,
    }
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        respond(true, message, Some(data))
    }

    pub fn ok_empty(message: impl Into<String>) -> Self {
        respond(true, message, None)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        respond(false, message, None)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn data_defaults_to_null() {
        let env: Envelope<Value> = Envelope::ok_empty("Category deleted.");
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"success": true, "message": "Category deleted.", "data": null})
        );
    }

    #[test]
    fn carries_payload() {
        let env = Envelope::ok("Category created.", json!({"categoryID": 4}));
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"success": true, "message": "Category created.", "data": {"categoryID": 4}})
        );
    }

    #[test]
    fn failure_shape() {
        let env: Envelope<Value> = respond(false, "Category not found.", None);
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["success"], json!(false));
        assert_eq!(v["data"], Value::Null);
    }
}
