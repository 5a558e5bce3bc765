//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a resource definition.
//! Identifiers come from the validated catalog only; values are always bound.

use crate::config::{FieldDef, JoinRead, ResourceDef, SqlType};
use crate::sql::MergePlan;
use serde_json::Value;

/// Quote identifier for PostgreSQL (safe: only from the catalog).
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Placeholder cast to the column type so text, numbers and dates all bind the same way.
pub(crate) fn placeholder(n: usize, ty: SqlType) -> String {
    format!("${}::{}", n, ty.cast())
}

/// Surrogate keys are compared as int8 so any positive id binds without overflow.
fn key_placeholder(n: usize) -> String {
    format!("${}::int8", n)
}

#[derive(Debug, Default)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
    /// Positions in `params` holding credential hashes.
    secret: Vec<usize>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf::default()
    }

    fn push_param(&mut self, v: Value) -> usize {
        self.params.push(v);
        self.params.len()
    }

    fn push_secret(&mut self, v: Value) -> usize {
        self.secret.push(self.params.len());
        self.push_param(v)
    }

    fn push_field(&mut self, field: &FieldDef, v: Value) -> usize {
        if field.secret {
            self.push_secret(v)
        } else {
            self.push_param(v)
        }
    }

    /// Params as they may appear in logs.
    pub fn loggable_params(&self) -> Vec<Value> {
        self.params
            .iter()
            .enumerate()
            .map(|(i, v)| {
                if self.secret.contains(&i) && !v.is_null() {
                    Value::String("<redacted>".into())
                } else {
                    v.clone()
                }
            })
            .collect()
    }
}

fn table(def: &ResourceDef) -> String {
    quoted(def.table)
}

fn column_expr(f: &FieldDef, alias: Option<&str>) -> String {
    let col = match alias {
        Some(a) => format!("{}.{}", a, quoted(f.column)),
        None => quoted(f.column),
    };
    match f.sql_type {
        // NUMERIC has no lossless decode without extra features; money columns fit in float8.
        SqlType::Numeric => format!("{}::float8 AS {}", col, quoted(f.column)),
        _ => col,
    }
}

/// SELECT list: surrogate key first, then every non-secret column.
fn select_column_list(def: &ResourceDef, alias: Option<&str>) -> String {
    let mut cols = Vec::new();
    if let Some(key) = def.key_column() {
        cols.push(match alias {
            Some(a) => format!("{}.{}", a, quoted(key)),
            None => quoted(key),
        });
    }
    cols.extend(def.projected().map(|f| column_expr(f, alias)));
    cols.join(", ")
}

fn order_clause(def: &ResourceDef, alias: Option<&str>) -> String {
    let cols: Vec<String> = def
        .order_columns()
        .into_iter()
        .map(|c| match alias {
            Some(a) => format!("{}.{}", a, quoted(c)),
            None => quoted(c),
        })
        .collect();
    format!(" ORDER BY {}", cols.join(", "))
}

/// SELECT with exact-match filters on declared fields, ordered by key.
pub fn select_list(def: &ResourceDef, filters: &[(&FieldDef, Value)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    for (f, v) in filters {
        let n = q.push_param(v.clone());
        where_parts.push(format!("{} = {}", quoted(f.column), placeholder(n, f.sql_type)));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!(
        "SELECT {} FROM {}{}{}",
        select_column_list(def, None),
        table(def),
        where_clause,
        order_clause(def, None)
    );
    q
}

/// SELECT by surrogate key. The id is the sole param.
pub fn select_by_id(def: &ResourceDef, key: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(Value::from(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        select_column_list(def, None),
        table(def),
        quoted(key),
        key_placeholder(n)
    );
    q
}

/// SELECT one row including secret columns, looked up by a unique column. Used for credential checks.
pub fn select_with_secrets_by(def: &ResourceDef, lookup: &FieldDef, value: Value) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(value);
    let mut cols = Vec::new();
    if let Some(key) = def.key_column() {
        cols.push(quoted(key));
    }
    cols.extend(def.fields.iter().map(|f| column_expr(f, None)));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        cols.join(", "),
        table(def),
        quoted(lookup.column),
        placeholder(n, lookup.sql_type)
    );
    q
}

/// INSERT of the given (field, value) pairs. Surrogate-key tables return the new key as int8.
pub fn insert(def: &ResourceDef, values: &[(&FieldDef, Value)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (f, v) in values {
        let n = q.push_field(f, v.clone());
        cols.push(quoted(f.column));
        placeholders.push(placeholder(n, f.sql_type));
    }
    let body = if cols.is_empty() {
        " DEFAULT VALUES".to_string()
    } else {
        format!(" ({}) VALUES ({})", cols.join(", "), placeholders.join(", "))
    };
    let returning = def
        .key_column()
        .map(|k| format!(" RETURNING {}::int8 AS {}", quoted(k), quoted(k)))
        .unwrap_or_default();
    q.sql = format!("INSERT INTO {}{}{}", table(def), body, returning);
    q
}

/// UPDATE by surrogate key using a merge plan; the id is bound after the plan's values.
pub fn update(def: &ResourceDef, key: &str, plan: MergePlan, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let MergePlan { assignments, params, secret } = plan;
    for (i, v) in params.into_iter().enumerate() {
        if secret.contains(&i) {
            q.push_secret(v);
        } else {
            q.push_param(v);
        }
    }
    let n = q.push_param(Value::from(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {}",
        table(def),
        assignments.join(", "),
        quoted(key),
        key_placeholder(n)
    );
    q
}

/// DELETE by surrogate key.
pub fn delete_by_id(def: &ResourceDef, key: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(Value::from(id));
    q.sql = format!("DELETE FROM {} WHERE {} = {}", table(def), quoted(key), key_placeholder(n));
    q
}

/// DELETE by two-column natural key.
pub fn delete_composite(def: &ResourceDef, parts: [(&FieldDef, Value); 2]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    for (f, v) in parts {
        let n = q.push_param(v);
        where_parts.push(format!("{} = {}", quoted(f.column), placeholder(n, f.sql_type)));
    }
    q.sql = format!("DELETE FROM {} WHERE {}", table(def), where_parts.join(" AND "));
    q
}

/// Rows of `def` for one parent, joined to the referenced table and flattened.
pub fn select_joined(def: &ResourceDef, join: &JoinRead, id: i64) -> QueryBuf {
    const LEFT: &str = "l";
    const RIGHT: &str = "r";
    let mut q = QueryBuf::new();
    let n = q.push_param(Value::from(id));
    let mut cols = vec![select_column_list(def, Some(LEFT))];
    cols.extend(join.columns.iter().map(|c| format!("{}.{}", RIGHT, quoted(c))));
    q.sql = format!(
        "SELECT {} FROM {} {} JOIN {} {} ON {}.{} = {}.{} WHERE {}.{} = {}{}",
        cols.join(", "),
        table(def),
        LEFT,
        quoted(join.table),
        RIGHT,
        LEFT,
        quoted(join.on_column),
        RIGHT,
        quoted(join.on_column),
        LEFT,
        quoted(join.filter_column),
        key_placeholder(n),
        order_clause(def, Some(LEFT))
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CreateHook, KeyDef, Messages, Operations};
    use serde_json::json;

    const MESSAGES: Messages = Messages {
        created: "Product created.",
        listed: "Products retrieved.",
        retrieved: "Product retrieved.",
        updated: "Product updated.",
        deleted: "Product deleted.",
        not_found: "Product not found.",
        missing: Messages::MISSING,
        duplicate: Messages::DUPLICATE,
    };

    static PRODUCT: ResourceDef = ResourceDef {
        family: "inventory",
        path: "products",
        table: "Product",
        label: "Product",
        key: KeyDef::Surrogate { field: "productID", column: "ProductID" },
        fields: &[
            FieldDef::new("name", "Name", SqlType::Text).required(),
            FieldDef::new("price", "Price", SqlType::Numeric).required(),
            FieldDef::new("secret", "SecretHash", SqlType::Text).secret(),
        ],
        unique: &[],
        operations: Operations::ALL,
        messages: MESSAGES,
        sensitive: false,
        create_hook: CreateHook::None,
        joins: &[],
        narrow_patches: &[],
    };

    static LINK: ResourceDef = ResourceDef {
        family: "ghostDiagnostics",
        path: "chosen-traits",
        table: "ChosenTrait",
        label: "Chosen trait",
        key: KeyDef::Composite(["inquiryFormID", "traitID"]),
        fields: &[
            FieldDef::reference("inquiryFormID", "InquiryFormID").required().fixed(),
            FieldDef::reference("traitID", "TraitID").required().fixed(),
        ],
        unique: &[],
        operations: Operations::LINK,
        messages: MESSAGES,
        sensitive: false,
        create_hook: CreateHook::None,
        joins: &[JoinRead {
            segment: "form",
            filter_column: "InquiryFormID",
            table: "Trait",
            on_column: "TraitID",
            columns: &["TraitName", "TraitType"],
            message: "Chosen traits retrieved.",
        }],
        narrow_patches: &[],
    };

    #[test]
    fn list_projects_key_and_public_columns_only() {
        let q = select_list(&PRODUCT, &[]);
        assert_eq!(
            q.sql,
            r#"SELECT "ProductID", "Name", "Price"::float8 AS "Price" FROM "Product" ORDER BY "ProductID""#
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn list_filters_are_cast_placeholders() {
        let name = PRODUCT.field("name").unwrap();
        let q = select_list(&PRODUCT, &[(name, json!("Hammer"))]);
        assert!(q.sql.contains(r#"WHERE "Name" = $1::text"#));
        assert_eq!(q.params, vec![json!("Hammer")]);
    }

    #[test]
    fn insert_returns_surrogate_key() {
        let name = PRODUCT.field("name").unwrap();
        let price = PRODUCT.field("price").unwrap();
        let q = insert(&PRODUCT, &[(name, json!("Hammer")), (price, json!(9.5))]);
        assert_eq!(
            q.sql,
            r#"INSERT INTO "Product" ("Name", "Price") VALUES ($1::text, $2::numeric) RETURNING "ProductID"::int8 AS "ProductID""#
        );
    }

    #[test]
    fn secrets_are_redacted_in_logs() {
        let secret = PRODUCT.field("secret").unwrap();
        let q = insert(&PRODUCT, &[(secret, json!("$2b$10$hash"))]);
        assert_eq!(q.params, vec![json!("$2b$10$hash")]);
        assert_eq!(q.loggable_params(), vec![json!("<redacted>")]);
    }

    #[test]
    fn composite_delete_binds_both_key_parts() {
        let a = LINK.field("inquiryFormID").unwrap();
        let b = LINK.field("traitID").unwrap();
        let q = delete_composite(&LINK, [(a, json!(3)), (b, json!(7))]);
        assert_eq!(
            q.sql,
            r#"DELETE FROM "ChosenTrait" WHERE "InquiryFormID" = $1::integer AND "TraitID" = $2::integer"#
        );
    }

    #[test]
    fn join_flattens_both_sides() {
        let q = select_joined(&LINK, &LINK.joins[0], 3);
        assert_eq!(
            q.sql,
            r#"SELECT l."InquiryFormID", l."TraitID", r."TraitName", r."TraitType" FROM "ChosenTrait" l JOIN "Trait" r ON l."TraitID" = r."TraitID" WHERE l."InquiryFormID" = $1::int8 ORDER BY l."InquiryFormID", l."TraitID""#
        );
        assert_eq!(q.params, vec![json!(3)]);
    }

    #[test]
    fn by_id_compares_as_int8() {
        let q = delete_by_id(&PRODUCT, "ProductID", 12);
        assert_eq!(q.sql, r#"DELETE FROM "Product" WHERE "ProductID" = $1::int8"#);
    }
}
