//! Declarative resource definitions: one `ResourceDef` per table exposed over HTTP.
//! Definitions are `static` and built with `const fn` helpers so every route can hold a `&'static ResourceDef`.

use serde_json::Value;

/// SQL type of a column. Drives placeholder casts, DDL and projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SqlType {
    Int,
    Numeric,
    Text,
    Date,
    Timestamp,
    Bool,
}

impl SqlType {
    /// Type name used in `$n::<type>` placeholder casts.
    pub fn cast(self) -> &'static str {
        match self {
            SqlType::Int => "integer",
            SqlType::Numeric => "numeric",
            SqlType::Text => "text",
            SqlType::Date => "date",
            SqlType::Timestamp => "timestamp",
            SqlType::Bool => "boolean",
        }
    }

    /// Column type used when bootstrapping tables.
    pub fn ddl(self) -> &'static str {
        match self {
            SqlType::Int => "INTEGER",
            SqlType::Numeric => "NUMERIC(12, 2)",
            SqlType::Text => "TEXT",
            SqlType::Date => "DATE",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::Bool => "BOOLEAN",
        }
    }
}

/// Value written on create when the client leaves a field blank.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldDefault {
    Text(&'static str),
    Int(i64),
}

impl FieldDefault {
    pub fn to_json(self) -> Value {
        match self {
            FieldDefault::Text(s) => Value::String(s.to_string()),
            FieldDefault::Int(n) => Value::Number(n.into()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FieldDef {
    /// Name in request payloads.
    pub field: &'static str,
    /// Column in the table; also the key used in response records.
    pub column: &'static str,
    pub sql_type: SqlType,
    /// Must be non-blank on create.
    pub required: bool,
    /// Eligible for the generic PATCH merge.
    pub patchable: bool,
    pub nullable: bool,
    pub default: Option<FieldDefault>,
    /// SQL default expression; the column is omitted from INSERT when blank.
    pub db_default: Option<&'static str>,
    /// Write-only credential: hashed before storage, never projected.
    pub secret: bool,
    /// Treat `0` as not provided (foreign keys and amounts are never zero).
    pub zero_is_blank: bool,
    /// Inclusive integer range.
    pub range: Option<(i64, i64)>,
}

impl FieldDef {
    pub const fn new(field: &'static str, column: &'static str, sql_type: SqlType) -> Self {
        FieldDef {
            field,
            column,
            sql_type,
            required: false,
            patchable: true,
            nullable: true,
            default: None,
            db_default: None,
            secret: false,
            zero_is_blank: false,
            range: None,
        }
    }

    /// Foreign-key reference to another row.
    pub const fn reference(field: &'static str, column: &'static str) -> Self {
        FieldDef {
            zero_is_blank: true,
            ..FieldDef::new(field, column, SqlType::Int)
        }
    }

    pub const fn required(self) -> Self {
        FieldDef {
            required: true,
            nullable: false,
            ..self
        }
    }

    pub const fn not_null(self) -> Self {
        FieldDef { nullable: false, ..self }
    }

    pub const fn fixed(self) -> Self {
        FieldDef { patchable: false, ..self }
    }

    pub const fn default_text(self, value: &'static str) -> Self {
        FieldDef {
            default: Some(FieldDefault::Text(value)),
            ..self
        }
    }

    pub const fn default_int(self, value: i64) -> Self {
        FieldDef {
            default: Some(FieldDefault::Int(value)),
            ..self
        }
    }

    pub const fn db_default(self, expression: &'static str) -> Self {
        FieldDef {
            db_default: Some(expression),
            ..self
        }
    }

    pub const fn secret(self) -> Self {
        FieldDef { secret: true, ..self }
    }

    pub const fn nonzero(self) -> Self {
        FieldDef {
            zero_is_blank: true,
            ..self
        }
    }

    pub const fn range(self, min: i64, max: i64) -> Self {
        FieldDef {
            range: Some((min, max)),
            ..self
        }
    }

    /// Blank means "not provided": missing, null, empty string, or zero where `zero_is_blank`.
    pub fn is_blank(&self, value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(Value::Number(n)) => self.zero_is_blank && n.as_f64() == Some(0.0),
            Some(_) => false,
        }
    }
}

/// Row identity.
#[derive(Clone, Copy, Debug)]
pub enum KeyDef {
    /// Auto-incrementing integer column, reported to clients under `field`.
    Surrogate { field: &'static str, column: &'static str },
    /// Two-column natural key; entries are field names from `fields`.
    Composite([&'static str; 2]),
}

#[derive(Clone, Copy, Debug)]
pub struct Operations {
    pub create: bool,
    pub list: bool,
    pub read: bool,
    pub update: bool,
    pub delete: bool,
}

impl Operations {
    pub const ALL: Operations = Operations {
        create: true,
        list: true,
        read: true,
        update: true,
        delete: true,
    };

    /// Records that are written once and never changed: create, list, read.
    pub const APPEND_ONLY: Operations = Operations {
        create: true,
        list: true,
        read: true,
        update: false,
        delete: false,
    };

    /// Link tables: create, filtered list and delete by composite key.
    pub const LINK: Operations = Operations {
        create: true,
        list: true,
        read: false,
        update: false,
        delete: true,
    };
}

/// User-facing messages for each outcome.
#[derive(Clone, Copy, Debug)]
pub struct Messages {
    pub created: &'static str,
    pub listed: &'static str,
    pub retrieved: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub not_found: &'static str,
    pub missing: &'static str,
    pub duplicate: &'static str,
}

impl Messages {
    pub const MISSING: &'static str = "Missing required fields.";
    pub const DUPLICATE: &'static str = "Duplicate entry.";

    pub const fn new(
        created: &'static str,
        listed: &'static str,
        retrieved: &'static str,
        updated: &'static str,
        deleted: &'static str,
        not_found: &'static str,
    ) -> Self {
        Messages {
            created,
            listed,
            retrieved,
            updated,
            deleted,
            not_found,
            missing: Messages::MISSING,
            duplicate: Messages::DUPLICATE,
        }
    }

    pub const fn missing(self, missing: &'static str) -> Self {
        Messages { missing, ..self }
    }

    pub const fn duplicate(self, duplicate: &'static str) -> Self {
        Messages { duplicate, ..self }
    }
}

/// Hook applied to the payload before a generic create.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateHook {
    None,
    /// Replace the card number with its last four digits and a token; drop CVV and expiry.
    CardPayment,
}

/// Read-side join: rows of this (link) table for one parent, flattened with columns of `table`.
#[derive(Clone, Copy, Debug)]
pub struct JoinRead {
    /// Route segment, e.g. `form` for `GET /chosen-traits/form/:id`.
    pub segment: &'static str,
    pub filter_column: &'static str,
    pub table: &'static str,
    /// Column present on both sides of the join.
    pub on_column: &'static str,
    pub columns: &'static [&'static str],
    pub message: &'static str,
}

/// PATCH route restricted to a subset of fields, e.g. `PATCH /rental/rental-status/:id`.
#[derive(Clone, Copy, Debug)]
pub struct NarrowPatch {
    pub segment: &'static str,
    pub fields: &'static [&'static str],
    pub message: &'static str,
}

#[derive(Debug)]
pub struct ResourceDef {
    /// Route family; mounted under `/api/<family>`.
    pub family: &'static str,
    pub path: &'static str,
    pub table: &'static str,
    pub label: &'static str,
    pub key: KeyDef,
    pub fields: &'static [FieldDef],
    /// Unique constraints as column lists.
    pub unique: &'static [&'static [&'static str]],
    pub operations: Operations,
    pub messages: Messages,
    /// Internal errors are reported as a generic message instead of the engine text.
    pub sensitive: bool,
    pub create_hook: CreateHook,
    pub joins: &'static [JoinRead],
    pub narrow_patches: &'static [NarrowPatch],
}

impl ResourceDef {
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.field == name)
    }

    pub fn column(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.column == name)
    }

    /// Surrogate key column, if any.
    pub fn key_column(&self) -> Option<&'static str> {
        match self.key {
            KeyDef::Surrogate { column, .. } => Some(column),
            KeyDef::Composite(_) => None,
        }
    }

    /// Columns used to order list results.
    pub fn order_columns(&self) -> Vec<&'static str> {
        match self.key {
            KeyDef::Surrogate { column, .. } => vec![column],
            KeyDef::Composite(fields) => fields
                .iter()
                .filter_map(|f| self.field(f).map(|d| d.column))
                .collect(),
        }
    }

    /// Fields that may appear in responses.
    pub fn projected(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|f| !f.secret)
    }

    pub fn patchable(&self) -> Vec<&'static FieldDef> {
        self.fields.iter().filter(|f| f.patchable).collect()
    }

    pub fn required(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|f| f.required)
    }

    pub fn has_secrets(&self) -> bool {
        self.fields.iter().any(|f| f.secret)
    }

    /// Catalog key, e.g. `inventory/categories`.
    pub fn route_key(&self) -> String {
        format!("{}/{}", self.family, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_covers_missing_null_and_empty_string() {
        let f = FieldDef::new("name", "Name", SqlType::Text);
        assert!(f.is_blank(None));
        assert!(f.is_blank(Some(&Value::Null)));
        assert!(f.is_blank(Some(&json!(""))));
        assert!(!f.is_blank(Some(&json!("Tools"))));
    }

    #[test]
    fn zero_is_a_value_unless_flagged() {
        let stock = FieldDef::new("stock", "Stock", SqlType::Int);
        assert!(!stock.is_blank(Some(&json!(0))));
        assert!(!stock.is_blank(Some(&json!(false))));

        let account = FieldDef::reference("accountID", "AccountID");
        assert!(account.is_blank(Some(&json!(0))));
        assert!(!account.is_blank(Some(&json!(7))));
    }

    #[test]
    fn required_implies_not_null() {
        let f = FieldDef::new("name", "Name", SqlType::Text).required();
        assert!(f.required);
        assert!(!f.nullable);
        assert!(f.patchable);
    }
}
