//! Create, list, get, update and delete shared by every [`Resource`].

use std::sync::Arc;

use axum::Json;
use axum::http::StatusCode;
use common::storage::{Collection, RecordId};
use tracing::info;

use crate::error::AppError;
use crate::models::resource::Resource;
use crate::models::shared::{MessageResponse, WithId};
use crate::state::AppState;

fn collection<R: Resource>(state: &AppState) -> Collection<R> {
    Collection::new(Arc::clone(&state.store), R::COLLECTION)
}

fn not_found<R: Resource>(id: RecordId) -> AppError {
    AppError::NotFound(format!("{} with ID {id} not found", R::LABEL))
}

pub(crate) async fn create<R: Resource>(
    state: &AppState,
    record: R,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let record = record.normalize()?;
    let id = collection::<R>(state).insert(&record).await?;
    info!(collection = R::COLLECTION, %id, "Created record");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!("{} created", R::LABEL), id)),
    ))
}

/// Every record in insertion order.
pub(crate) async fn list<R: Resource>(state: &AppState) -> Result<Json<Vec<WithId<R>>>, AppError> {
    let records = collection::<R>(state).find_all().await?;
    Ok(Json(
        records
            .into_iter()
            .map(|stored| WithId {
                id: stored.id.encode(),
                record: stored.record,
            })
            .collect(),
    ))
}

pub(crate) async fn get<R: Resource>(
    state: &AppState,
    id: RecordId,
) -> Result<Json<WithId<R>>, AppError> {
    let stored = collection::<R>(state)
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;

    Ok(Json(WithId {
        id: stored.id.encode(),
        record: stored.record,
    }))
}

/// Apply the fields present in `changes`. A body that sets nothing is a
/// validation error; one that repeats the stored values is not.
pub(crate) async fn update<R: Resource>(
    state: &AppState,
    id: RecordId,
    changes: R::Changes,
) -> Result<Json<MessageResponse>, AppError> {
    let changes = R::normalize_changes(changes)?;
    let collection = collection::<R>(state);

    if collection.find_by_id(id).await?.is_none() {
        return Err(not_found::<R>(id));
    }

    let fields = bson::to_document(&changes).map_err(|e| AppError::Validation(e.to_string()))?;
    if fields.is_empty() {
        return Err(AppError::Validation("No valid fields to update".into()));
    }

    let modified = collection.update(id, &fields).await?;
    info!(collection = R::COLLECTION, %id, modified, "Updated record");

    Ok(Json(MessageResponse::new(
        format!("{} updated successfully", R::LABEL),
        id,
    )))
}

pub(crate) async fn delete<R: Resource>(
    state: &AppState,
    id: RecordId,
) -> Result<Json<MessageResponse>, AppError> {
    if collection::<R>(state).delete(id).await? == 0 {
        return Err(not_found::<R>(id));
    }
    info!(collection = R::COLLECTION, %id, "Deleted record");

    Ok(Json(MessageResponse::new(
        format!("{} deleted successfully", R::LABEL),
        id,
    )))
}
