//! Catalog validation: identifiers, key and field references, route uniqueness.

use crate::config::{KeyDef, ResourceDef, SqlType};
use crate::error::ConfigError;
use regex::Regex;
use std::collections::HashSet;

/// Identifiers are interpolated into SQL, so only plain names are accepted.
const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";
const SEGMENT_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_-]*$";

pub fn validate(resources: &[&ResourceDef]) -> Result<(), ConfigError> {
    let ident = Regex::new(IDENTIFIER_PATTERN).map_err(|e| ConfigError::Validation(e.to_string()))?;
    let segment = Regex::new(SEGMENT_PATTERN).map_err(|e| ConfigError::Validation(e.to_string()))?;

    let mut routes = HashSet::new();
    for r in resources {
        if !routes.insert(r.route_key()) {
            return Err(ConfigError::DuplicatePath(r.route_key()));
        }
        for s in [r.family, r.path] {
            if !segment.is_match(s) {
                return Err(ConfigError::InvalidIdentifier(s.to_string()));
            }
        }
        if !ident.is_match(r.table) {
            return Err(ConfigError::InvalidIdentifier(r.table.to_string()));
        }

        let mut fields = HashSet::new();
        let mut columns = HashSet::new();
        for f in r.fields {
            if !ident.is_match(f.column) {
                return Err(ConfigError::InvalidIdentifier(f.column.to_string()));
            }
            if !fields.insert(f.field) || !columns.insert(f.column) {
                return Err(ConfigError::Validation(format!(
                    "{}: field {} declared twice",
                    r.route_key(),
                    f.field
                )));
            }
            if f.range.is_some() && f.sql_type != SqlType::Int {
                return Err(ConfigError::Validation(format!(
                    "{}: range on non-integer field {}",
                    r.route_key(),
                    f.field
                )));
            }
        }

        match r.key {
            KeyDef::Surrogate { column, .. } => {
                if !ident.is_match(column) {
                    return Err(ConfigError::InvalidIdentifier(column.to_string()));
                }
                if columns.contains(column) {
                    return Err(ConfigError::InvalidPrimaryKey {
                        table: r.table.to_string(),
                        column: column.to_string(),
                    });
                }
            }
            KeyDef::Composite(parts) => {
                for p in parts {
                    match r.field(p) {
                        Some(f) if f.required && !f.patchable => {}
                        _ => {
                            return Err(ConfigError::InvalidPrimaryKey {
                                table: r.table.to_string(),
                                column: p.to_string(),
                            })
                        }
                    }
                }
                if r.operations.read || r.operations.update {
                    return Err(ConfigError::Validation(format!(
                        "{}: composite-key resources have no single-id routes",
                        r.route_key()
                    )));
                }
            }
        }

        for u in r.unique {
            for c in *u {
                if !columns.contains(c) {
                    return Err(ConfigError::MissingReference {
                        kind: "unique column",
                        id: format!("{}.{}", r.table, c),
                    });
                }
            }
        }

        for p in r.narrow_patches {
            if !segment.is_match(p.segment) {
                return Err(ConfigError::InvalidIdentifier(p.segment.to_string()));
            }
            for f in p.fields {
                if r.field(f).is_none() {
                    return Err(ConfigError::MissingReference {
                        kind: "field",
                        id: format!("{}.{}", r.route_key(), f),
                    });
                }
            }
        }

        for j in r.joins {
            if !segment.is_match(j.segment) {
                return Err(ConfigError::InvalidIdentifier(j.segment.to_string()));
            }
            for c in [j.filter_column, j.on_column] {
                if r.column(c).is_none() {
                    return Err(ConfigError::MissingReference {
                        kind: "join column",
                        id: format!("{}.{}", r.table, c),
                    });
                }
            }
            for c in std::iter::once(&j.table).chain(j.columns.iter()) {
                if !ident.is_match(c) {
                    return Err(ConfigError::InvalidIdentifier(c.to_string()));
                }
            }
        }
    }
    Ok(())
}
