//! Bootstrap tables from the catalog: one `CREATE TABLE IF NOT EXISTS` per resource.
//! Referential constraints are left to the operator's own migrations.

use crate::config::{KeyDef, ResourceCatalog, ResourceDef};
use crate::error::AppError;
use crate::sql::quoted;
use sqlx::PgPool;

/// DDL for one resource.
pub fn create_table_sql(def: &ResourceDef) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let KeyDef::Surrogate { column, .. } = def.key {
        parts.push(format!("{} SERIAL PRIMARY KEY", quoted(column)));
    }
    for f in def.fields {
        let mut col = format!("{} {}", quoted(f.column), f.sql_type.ddl());
        if !f.nullable {
            col.push_str(" NOT NULL");
        }
        if let Some(expr) = f.db_default {
            col.push_str(" DEFAULT ");
            col.push_str(expr);
        }
        parts.push(col);
    }
    if let KeyDef::Composite(keys) = def.key {
        let cols: Vec<String> = keys
            .iter()
            .filter_map(|k| def.field(k))
            .map(|f| quoted(f.column))
            .collect();
        parts.push(format!("PRIMARY KEY ({})", cols.join(", ")));
    }
    for u in def.unique {
        let cols: Vec<String> = u.iter().map(|c| quoted(c)).collect();
        parts.push(format!("UNIQUE ({})", cols.join(", ")));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quoted(def.table),
        parts.join(", ")
    )
}

/// Create every missing table. Existing tables are left untouched.
pub async fn apply_schema(pool: &PgPool, catalog: &ResourceCatalog) -> Result<(), AppError> {
    for def in catalog.resources() {
        let sql = create_table_sql(def);
        tracing::debug!(sql = %sql, "schema");
        sqlx::query(&sql).execute(pool).await.map_err(|e| {
            tracing::error!(table = def.table, error = %e, "schema bootstrap failed");
            AppError::Db(e)
        })?;
    }
    tracing::info!(tables = catalog.resources().len(), "schema applied");
    Ok(())
}
