//! Generic CRUD execution against PostgreSQL.

use crate::config::{FieldDef, JoinRead, ResourceDef};
use crate::error::AppError;
use crate::sql::{
    delete_by_id, delete_composite, insert, select_by_id, select_joined, select_list, select_with_secrets_by,
    update, MergePlan, PgBindValue, QueryBuf,
};
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};

pub struct CrudService;

impl CrudService {
    /// List rows with optional exact-match filters, ordered by key.
    pub async fn list(
        pool: &PgPool,
        def: &ResourceDef,
        filters: &[(&FieldDef, Value)],
    ) -> Result<Vec<Value>, AppError> {
        let q = select_list(def, filters);
        Self::fetch_all(pool, def, &q).await
    }

    /// Fetch one row by surrogate key.
    pub async fn read(pool: &PgPool, def: &ResourceDef, id: i64) -> Result<Option<Value>, AppError> {
        let Some(key) = def.key_column() else {
            return Ok(None);
        };
        let q = select_by_id(def, key, id);
        Self::fetch_optional(pool, def, &q).await
    }

    /// Fetch one row including secret columns, for credential checks only.
    pub async fn find_with_secrets(
        pool: &PgPool,
        def: &ResourceDef,
        lookup: &FieldDef,
        value: Value,
    ) -> Result<Option<Value>, AppError> {
        let q = select_with_secrets_by(def, lookup, value);
        Self::fetch_optional(pool, def, &q).await
    }

    /// Insert one row. Returns the new surrogate key, or None for composite-key tables.
    pub async fn create(
        pool: &PgPool,
        def: &ResourceDef,
        values: &[(&FieldDef, Value)],
    ) -> Result<Option<i64>, AppError> {
        let q = insert(def, values);
        if def.key_column().is_none() {
            Self::execute(pool, def, &q).await?;
            return Ok(None);
        }
        tracing::debug!(sql = %q.sql, params = ?q.loggable_params(), "query");
        let row = bind_all(sqlx::query(&q.sql), &q)
            .fetch_one(pool)
            .await
            .map_err(|e| AppError::from_store(e, def))?;
        let id: i64 = row.try_get(0).map_err(|e| AppError::from_store(e, def))?;
        Ok(Some(id))
    }

    /// Apply a merge plan to one row. Returns rows affected.
    pub async fn update(pool: &PgPool, def: &ResourceDef, plan: MergePlan, id: i64) -> Result<u64, AppError> {
        let Some(key) = def.key_column() else {
            return Ok(0);
        };
        let q = update(def, key, plan, id);
        Self::execute(pool, def, &q).await
    }

    /// Delete one row by surrogate key. Returns rows affected.
    pub async fn delete(pool: &PgPool, def: &ResourceDef, id: i64) -> Result<u64, AppError> {
        let Some(key) = def.key_column() else {
            return Ok(0);
        };
        let q = delete_by_id(def, key, id);
        Self::execute(pool, def, &q).await
    }

    /// Delete one row by natural key. Returns rows affected.
    pub async fn delete_composite(
        pool: &PgPool,
        def: &ResourceDef,
        parts: [(&FieldDef, Value); 2],
    ) -> Result<u64, AppError> {
        let q = delete_composite(def, parts);
        Self::execute(pool, def, &q).await
    }

    /// Link rows for one parent, flattened with the joined table's columns.
    pub async fn joined(pool: &PgPool, def: &ResourceDef, join: &JoinRead, id: i64) -> Result<Vec<Value>, AppError> {
        let q = select_joined(def, join, id);
        Self::fetch_all(pool, def, &q).await
    }

    async fn fetch_all(pool: &PgPool, def: &ResourceDef, q: &QueryBuf) -> Result<Vec<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.loggable_params(), "query");
        let rows = bind_all(sqlx::query(&q.sql), q)
            .fetch_all(pool)
            .await
            .map_err(|e| AppError::from_store(e, def))?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn fetch_optional(pool: &PgPool, def: &ResourceDef, q: &QueryBuf) -> Result<Option<Value>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.loggable_params(), "query");
        let row = bind_all(sqlx::query(&q.sql), q)
            .fetch_optional(pool)
            .await
            .map_err(|e| AppError::from_store(e, def))?;
        Ok(row.map(|r| row_to_json(&r)))
    }

    async fn execute(pool: &PgPool, def: &ResourceDef, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.loggable_params(), "execute");
        let result = bind_all(sqlx::query(&q.sql), q)
            .execute(pool)
            .await
            .map_err(|e| AppError::from_store(e, def))?;
        Ok(result.rows_affected())
    }
}

fn bind_all<'q>(mut query: Query<'q, Postgres, PgArguments>, q: &QueryBuf) -> Query<'q, Postgres, PgArguments> {
    for p in &q.params {
        query = query.bind(PgBindValue::from_json(p));
    }
    query
}

pub(crate) fn row_to_json(row: &PgRow) -> Value {
    use sqlx::Column;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

fn cell_to_value(row: &PgRow, name: &str) -> Value {
    if let Ok(Some(n)) = row.try_get::<Option<i16>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(name) {
        return Value::Bool(b);
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name) {
        return Value::String(d.to_rfc3339());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDateTime>, _>(name) {
        return Value::String(d.format("%Y-%m-%dT%H:%M:%S").to_string());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDate>, _>(name) {
        return Value::String(d.format("%Y-%m-%d").to_string());
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    if let Ok(Some(j)) = row.try_get::<Option<Value>, _>(name) {
        return j;
    }
    Value::Null
}
