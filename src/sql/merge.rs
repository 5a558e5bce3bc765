//! Partial-update merge: every eligible column is assigned `COALESCE($n, "Col")`,
//! so a NULL parameter keeps the stored value and a present value overwrites it.

use crate::config::FieldDef;
use crate::error::AppError;
use crate::sql::builder::{placeholder, quoted};
use serde_json::{Map, Value};

pub const NO_FIELDS_MESSAGE: &str = "No fields provided to update.";

#[derive(Debug)]
pub struct MergePlan {
    pub assignments: Vec<String>,
    pub params: Vec<Value>,
    /// Positions in `params` that hold credential hashes.
    pub secret: Vec<usize>,
}

/// Build the SET list for `fields` from a sparse payload.
/// Fails with a validation error, before any statement exists, when no eligible field is present.
pub fn plan(fields: &[&FieldDef], payload: &Map<String, Value>) -> Result<MergePlan, AppError> {
    let mut out = MergePlan {
        assignments: Vec::with_capacity(fields.len()),
        params: Vec::with_capacity(fields.len()),
        secret: Vec::new(),
    };
    let mut provided = 0usize;
    for f in fields {
        let value = payload.get(f.field);
        let bound = if f.is_blank(value) {
            Value::Null
        } else {
            provided += 1;
            value.cloned().unwrap_or(Value::Null)
        };
        if f.secret {
            out.secret.push(out.params.len());
        }
        out.params.push(bound);
        let col = quoted(f.column);
        out.assignments.push(format!(
            "{} = COALESCE({}, {})",
            col,
            placeholder(out.params.len(), f.sql_type),
            col
        ));
    }
    if provided == 0 {
        return Err(AppError::Validation(NO_FIELDS_MESSAGE.to_string()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SqlType;
    use serde_json::json;

    const NAME: FieldDef = FieldDef::new("name", "Name", SqlType::Text);
    const STOCK: FieldDef = FieldDef::new("stock", "Stock", SqlType::Int);
    const ACCOUNT: FieldDef = FieldDef::reference("accountID", "AccountID");

    fn payload(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => Map::new(),
        }
    }

    #[test]
    fn absent_fields_bind_null_and_keep_stored_value() {
        let p = plan(&[&NAME, &STOCK], &payload(json!({"name": "Drill"}))).unwrap();
        assert_eq!(
            p.assignments,
            vec![
                r#""Name" = COALESCE($1::text, "Name")"#.to_string(),
                r#""Stock" = COALESCE($2::integer, "Stock")"#.to_string(),
            ]
        );
        assert_eq!(p.params, vec![json!("Drill"), Value::Null]);
    }

    #[test]
    fn null_and_empty_string_are_absent() {
        let p = plan(&[&NAME, &STOCK], &payload(json!({"name": "", "stock": null, "other": 1})));
        match p {
            Err(AppError::Validation(m)) => assert_eq!(m, NO_FIELDS_MESSAGE),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn zero_overwrites_unless_field_treats_it_as_blank() {
        let p = plan(&[&STOCK, &ACCOUNT], &payload(json!({"stock": 0, "accountID": 0}))).unwrap();
        assert_eq!(p.params, vec![json!(0), Value::Null]);
    }

    #[test]
    fn empty_body_is_rejected() {
        assert!(plan(&[&NAME], &Map::new()).is_err());
    }
}
