use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use models::named_item::{validate_id, NamedItem, NamedItemPatch, NewNamedItem};
use serde::Deserialize;
use service::named_item::{CreateOutcome, DeleteOutcome, NamedItemService, NamedItemStore};

use crate::errors::ApiError;

type Svc<S> = Arc<NamedItemService<S>>;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Include disabled rows.
    pub deleted: Option<bool>,
}

pub async fn list<S: NamedItemStore + 'static>(
    State(svc): State<Svc<S>>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<NamedItem>>, ApiError> {
    Ok(Json(svc.list(q.deleted).await?))
}

pub async fn get_by_id<S: NamedItemStore + 'static>(
    State(svc): State<Svc<S>>,
    Path(id): Path<String>,
) -> Result<Json<NamedItem>, ApiError> {
    match svc.get(&id).await? {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_exists(format!("No item with id {id}"))),
    }
}

/// Echoes the created row, flag normalised.
pub async fn create<S: NamedItemStore + 'static>(
    State(svc): State<Svc<S>>,
    Json(body): Json<NamedItemPatch>,
) -> Result<Json<NamedItem>, ApiError> {
    let input = NewNamedItem::try_from(body)?;
    match svc.create(input).await? {
        CreateOutcome::Created(item) => Ok(Json(item)),
        CreateOutcome::AlreadyExists => Err(ApiError::conflict()),
    }
}

pub async fn update<S: NamedItemStore + 'static>(
    State(svc): State<Svc<S>>,
    Path(id): Path<String>,
    Json(body): Json<NamedItemPatch>,
) -> Result<Json<NamedItem>, ApiError> {
    validate_id(&id)?;
    match body.id.as_deref() {
        None => return Err(ApiError::invalid_field("id must not be null")),
        Some(body_id) if body_id != id => {
            return Err(ApiError::invalid_field("id field is not the same as in the URL"));
        }
        Some(_) => {}
    }
    Ok(Json(svc.upsert(&id, body).await?))
}

pub async fn delete<S: NamedItemStore + 'static>(
    State(svc): State<Svc<S>>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    match svc.delete(&id).await? {
        DeleteOutcome::Deleted => Ok(()),
        DeleteOutcome::NotFound => Err(ApiError::not_exists(format!("No item with id {id}"))),
        DeleteOutcome::Referenced => {
            Err(ApiError::cant_delete_referenced(format!("Item id {id} is referenced and can't be deleted")))
        }
    }
}

/// CRUD routes for one named-item type, meant to be nested under its prefix.
pub fn router<S: NamedItemStore + 'static>(svc: Svc<S>) -> Router {
    Router::new()
        .route("/", get(list::<S>).post(create::<S>))
        .route("/:id", get(get_by_id::<S>).put(update::<S>).delete(delete::<S>))
        .with_state(svc)
}
