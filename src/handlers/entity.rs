//! Generic resource handlers: create, list, read, update, delete, plus link-table and join variants.
//! Each takes the `ResourceDef` it was mounted for; routes bind them with closures.

use crate::config::{CreateHook, FieldDef, JoinRead, KeyDef, NarrowPatch, ResourceDef, SqlType};
use crate::error::{AppError, INTERNAL_MESSAGE};
use crate::response::Envelope;
use crate::service::secrets::{hash_secrets, redact_card, CARD_NUMBER_FIELD};
use crate::service::{filter_value, parse_id, CrudService, RequestValidator};
use crate::sql::merge_plan;
use crate::state::AppState;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

type Body = Map<String, Value>;

/// Raw card number: required on payment create, never stored.
const CARD_NUMBER: FieldDef = FieldDef::new(CARD_NUMBER_FIELD, "CardNo", SqlType::Text);

fn apply_create_hook(def: &ResourceDef, body: &mut Body) -> Result<(), AppError> {
    match def.create_hook {
        CreateHook::None => Ok(()),
        CreateHook::CardPayment => {
            RequestValidator::require_fields([&CARD_NUMBER], body, def.messages.missing)?;
            redact_card(body);
            Ok(())
        }
    }
}

/// Column values for INSERT: supplied values, else the field default. Blank fields without a default are omitted.
fn insert_values(def: &'static ResourceDef, body: &Body) -> Vec<(&'static FieldDef, Value)> {
    def.fields
        .iter()
        .filter_map(|f| {
            let v = body.get(f.field);
            if !f.is_blank(v) {
                return v.cloned().map(|v| (f, v));
            }
            f.default.map(|d| (f, d.to_json()))
        })
        .collect()
}

pub async fn create(state: AppState, def: &'static ResourceDef, mut body: Body) -> Result<Envelope<Value>, AppError> {
    apply_create_hook(def, &mut body)?;
    RequestValidator::require(def, &body)?;
    RequestValidator::validate_ranges(def.fields, &body)?;
    hash_secrets(def.fields.iter().collect(), &mut body, state.config.bcrypt_cost).await?;

    let values = insert_values(def, &body);
    let created = CrudService::create(&state.pool, def, &values).await?;
    let data = match (def.key, created) {
        (KeyDef::Surrogate { field, .. }, Some(id)) => json!({ field: id }),
        (KeyDef::Composite(parts), _) => {
            let mut m = Map::new();
            for p in parts {
                m.insert(p.to_string(), body.get(p).cloned().unwrap_or(Value::Null));
            }
            Value::Object(m)
        }
        (KeyDef::Surrogate { .. }, None) => Value::Null,
    };
    tracing::info!(resource = %def.route_key(), key = %data, "created");
    Ok(Envelope::ok(def.messages.created, data))
}

pub async fn list(
    state: AppState,
    def: &'static ResourceDef,
    params: HashMap<String, String>,
) -> Result<Envelope<Vec<Value>>, AppError> {
    let filters: Vec<(&FieldDef, Value)> = def
        .projected()
        .filter_map(|f| params.get(f.field).map(|raw| (f, filter_value(f, raw))))
        .collect();
    let rows = CrudService::list(&state.pool, def, &filters).await?;
    Ok(Envelope::ok(def.messages.listed, rows))
}

pub async fn read(state: AppState, def: &'static ResourceDef, id: String) -> Result<Envelope<Value>, AppError> {
    let id = parse_id(&id)?;
    match CrudService::read(&state.pool, def, id).await? {
        Some(row) => Ok(Envelope::ok(def.messages.retrieved, row)),
        None => Err(AppError::NotFound(def.messages.not_found.into())),
    }
}

/// Merge the payload into one row, limited to `fields`.
async fn merge_into(
    state: &AppState,
    def: &'static ResourceDef,
    fields: &[&'static FieldDef],
    id: String,
    mut body: Body,
) -> Result<(), AppError> {
    let id = parse_id(&id)?;
    RequestValidator::validate_ranges(fields.iter().copied(), &body)?;
    hash_secrets(fields.to_vec(), &mut body, state.config.bcrypt_cost).await?;
    let plan = merge_plan(fields, &body)?;
    if CrudService::update(&state.pool, def, plan, id).await? == 0 {
        return Err(AppError::NotFound(def.messages.not_found.into()));
    }
    tracing::info!(resource = %def.route_key(), id, "updated");
    Ok(())
}

pub async fn update(state: AppState, def: &'static ResourceDef, id: String, body: Body) -> Result<Envelope<Value>, AppError> {
    let fields = def.patchable();
    merge_into(&state, def, &fields, id, body).await?;
    Ok(Envelope::ok_empty(def.messages.updated))
}

pub async fn update_subset(
    state: AppState,
    def: &'static ResourceDef,
    patch: &'static NarrowPatch,
    id: String,
    body: Body,
) -> Result<Envelope<Value>, AppError> {
    let fields: Vec<&'static FieldDef> = patch.fields.iter().filter_map(|f| def.field(f)).collect();
    merge_into(&state, def, &fields, id, body).await?;
    Ok(Envelope::ok_empty(patch.message))
}

pub async fn delete(state: AppState, def: &'static ResourceDef, id: String) -> Result<Envelope<Value>, AppError> {
    let id = parse_id(&id)?;
    if CrudService::delete(&state.pool, def, id).await? == 0 {
        return Err(AppError::NotFound(def.messages.not_found.into()));
    }
    tracing::info!(resource = %def.route_key(), id, "deleted");
    Ok(Envelope::ok_empty(def.messages.deleted))
}

/// Delete a link row identified by both key fields in the body.
pub async fn delete_composite(state: AppState, def: &'static ResourceDef, body: Body) -> Result<Envelope<Value>, AppError> {
    let KeyDef::Composite([a, b]) = def.key else {
        return Err(AppError::NotFound(def.messages.not_found.into()));
    };
    let (Some(fa), Some(fb)) = (def.field(a), def.field(b)) else {
        return Err(AppError::Internal(INTERNAL_MESSAGE.into()));
    };
    RequestValidator::require_fields([fa, fb], &body, def.messages.missing)?;
    let parts = [
        (fa, body.get(a).cloned().unwrap_or(Value::Null)),
        (fb, body.get(b).cloned().unwrap_or(Value::Null)),
    ];
    if CrudService::delete_composite(&state.pool, def, parts).await? == 0 {
        return Err(AppError::NotFound(def.messages.not_found.into()));
    }
    Ok(Envelope::ok_empty(def.messages.deleted))
}

pub async fn joined(
    state: AppState,
    def: &'static ResourceDef,
    join: &'static JoinRead,
    id: String,
) -> Result<Envelope<Vec<Value>>, AppError> {
    let id = parse_id(&id)?;
    let rows = CrudService::joined(&state.pool, def, join, id).await?;
    Ok(Envelope::ok(join.message, rows))
}
