//! Request validation from catalog rules.

use crate::config::{FieldDef, ResourceDef, SqlType};
use crate::error::AppError;
use serde_json::{Map, Value};

pub const INVALID_ID_MESSAGE: &str = "Invalid id.";
pub const NOT_AN_OBJECT_MESSAGE: &str = "Request body must be a JSON object.";

pub struct RequestValidator;

impl RequestValidator {
    /// Every create-required field must be non-blank.
    pub fn require(def: &ResourceDef, body: &Map<String, Value>) -> Result<(), AppError> {
        Self::require_fields(def.required(), body, def.messages.missing)
    }

    pub fn require_fields<'a>(
        fields: impl IntoIterator<Item = &'a FieldDef>,
        body: &Map<String, Value>,
        message: &str,
    ) -> Result<(), AppError> {
        for f in fields {
            if f.is_blank(body.get(f.field)) {
                tracing::debug!(field = f.field, "required field missing");
                return Err(AppError::Validation(message.to_string()));
            }
        }
        Ok(())
    }

    /// Range-checked fields that are present must hold an integer inside their bounds.
    pub fn validate_ranges<'a>(
        fields: impl IntoIterator<Item = &'a FieldDef>,
        body: &Map<String, Value>,
    ) -> Result<(), AppError> {
        for f in fields {
            let Some((min, max)) = f.range else { continue };
            let v = body.get(f.field);
            if f.is_blank(v) {
                continue;
            }
            if !v.map(|v| within(v, min, max)).unwrap_or(false) {
                return Err(AppError::Validation(format!(
                    "Invalid {} value, must be {}-{}",
                    f.field, min, max
                )));
            }
        }
        Ok(())
    }
}

pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

fn within(value: &Value, min: i64, max: i64) -> bool {
    value.as_i64().map(|n| (min..=max).contains(&n)).unwrap_or(false)
}

/// True iff `value` is an integer between 1 and 5 inclusive.
pub fn validate_rating(value: &Value) -> bool {
    within(value, RATING_MIN, RATING_MAX)
}

/// Path ids are positive integers.
pub fn parse_id(id_str: &str) -> Result<i64, AppError> {
    match id_str.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Validation(INVALID_ID_MESSAGE.into())),
    }
}

pub fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::Validation(NOT_AN_OBJECT_MESSAGE.into())),
    }
}

/// Typed JSON value for a query-string filter; unparsable input stays a string and is cast by the store.
pub fn filter_value(field: &FieldDef, s: &str) -> Value {
    match field.sql_type {
        SqlType::Int => s
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(s.to_string())),
        SqlType::Bool if s.eq_ignore_ascii_case("true") => Value::Bool(true),
        SqlType::Bool if s.eq_ignore_ascii_case("false") => Value::Bool(false),
        _ => Value::String(s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RATING: FieldDef = FieldDef::new("rating", "Rating", SqlType::Int).required().range(1, 5);
    const COMMENT: FieldDef = FieldDef::new("comment", "Comment", SqlType::Text);

    fn body(v: Value) -> Map<String, Value> {
        body_to_map(v).unwrap()
    }

    #[test]
    fn rating_bounds() {
        for r in 1..=5 {
            assert!(validate_rating(&json!(r)));
        }
        assert!(!validate_rating(&json!(0)));
        assert!(!validate_rating(&json!(6)));
        assert!(!validate_rating(&json!(-1)));
        assert!(!validate_rating(&json!(2.5)));
        assert!(!validate_rating(&json!("3")));
        assert!(!validate_rating(&Value::Null));
    }

    #[test]
    fn out_of_range_rating_is_rejected_with_message() {
        let err = RequestValidator::validate_ranges([&RATING, &COMMENT], &body(json!({"rating": 9})))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid rating value, must be 1-5");
        assert!(RequestValidator::validate_ranges([&RATING], &body(json!({"rating": 4}))).is_ok());
        assert!(RequestValidator::validate_ranges([&RATING], &body(json!({"comment": "ok"}))).is_ok());
    }

    #[test]
    fn required_uses_given_message() {
        let err = RequestValidator::require_fields([&RATING], &body(json!({"rating": ""})), "Missing required fields")
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn ids_must_be_positive_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        for bad in ["0", "-3", "abc", "1.5", ""] {
            assert_eq!(parse_id(bad).unwrap_err().to_string(), INVALID_ID_MESSAGE);
        }
    }

    #[test]
    fn body_must_be_object() {
        assert!(body_to_map(json!([1, 2])).is_err());
    }

    #[test]
    fn filters_follow_column_type() {
        let id = FieldDef::reference("accountID", "AccountID");
        assert_eq!(filter_value(&id, "7"), json!(7));
        assert_eq!(filter_value(&COMMENT, "7"), json!("7"));
    }
}
