//! Resource routes built from a `ResourceDef`. Only the operations the resource enables are registered.

use crate::config::ResourceDef;
use crate::extractors::JsonBody;
use crate::handlers::entity;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{patch, MethodRouter},
    Router,
};
use std::collections::HashMap;

/// `/<path>` and `/<path>/:id` for one resource, plus its join reads and narrow PATCH routes.
pub fn resource_routes(def: &'static ResourceDef) -> Router<AppState> {
    let ops = def.operations;
    let composite = def.key_column().is_none();
    let mut router = Router::new();

    let mut collection: Option<MethodRouter<AppState>> = None;
    if ops.list {
        let get = axum::routing::get(
            move |State(state): State<AppState>, Query(params): Query<HashMap<String, String>>| async move {
                entity::list(state, def, params).await
            },
        );
        collection = Some(get);
    }
    if ops.create {
        let handler = move |State(state): State<AppState>, JsonBody(body): JsonBody| async move {
            entity::create(state, def, body).await
        };
        collection = Some(match collection {
            Some(mr) => mr.post(handler),
            None => axum::routing::post(handler),
        });
    }
    if ops.delete && composite {
        let handler = move |State(state): State<AppState>, JsonBody(body): JsonBody| async move {
            entity::delete_composite(state, def, body).await
        };
        collection = Some(match collection {
            Some(mr) => mr.delete(handler),
            None => axum::routing::delete(handler),
        });
    }
    if let Some(mr) = collection {
        router = router.route(&format!("/{}", def.path), mr);
    }

    if !composite {
        let mut item: Option<MethodRouter<AppState>> = None;
        if ops.read {
            item = Some(axum::routing::get(
                move |State(state): State<AppState>, Path(id): Path<String>| async move {
                    entity::read(state, def, id).await
                },
            ));
        }
        if ops.update {
            let handler = move |State(state): State<AppState>, Path(id): Path<String>, JsonBody(body): JsonBody| async move {
                entity::update(state, def, id, body).await
            };
            item = Some(match item {
                Some(mr) => mr.patch(handler),
                None => patch(handler),
            });
        }
        if ops.delete {
            let handler = move |State(state): State<AppState>, Path(id): Path<String>| async move {
                entity::delete(state, def, id).await
            };
            item = Some(match item {
                Some(mr) => mr.delete(handler),
                None => axum::routing::delete(handler),
            });
        }
        if let Some(mr) = item {
            router = router.route(&format!("/{}/:id", def.path), mr);
        }
    }

    for join in def.joins {
        router = router.route(
            &format!("/{}/{}/:id", def.path, join.segment),
            axum::routing::get(move |State(state): State<AppState>, Path(id): Path<String>| async move {
                entity::joined(state, def, join, id).await
            }),
        );
    }

    for narrow in def.narrow_patches {
        router = router.route(
            &format!("/{}/{}/:id", def.path, narrow.segment),
            patch(
                move |State(state): State<AppState>, Path(id): Path<String>, JsonBody(body): JsonBody| async move {
                    entity::update_subset(state, def, narrow, id, body).await
                },
            ),
        );
    }

    router
}
