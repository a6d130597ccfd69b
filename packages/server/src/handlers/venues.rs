use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

use super::crud;
use crate::error::{AppError, ErrorBody};
use crate::extractors::id::IdPath;
use crate::extractors::json::AppJson;
use crate::models::shared::{MessageResponse, WithId};
use crate::models::venue::{Venue, VenueChanges};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/venues",
    tag = "Venues",
    operation_id = "createVenue",
    summary = "Create a venue",
    description = "`capacity` must be >= 0.",
    request_body = Venue,
    responses(
        (status = 201, description = "Venue created", body = MessageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR, INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_venue(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Venue>,
) -> Result<impl IntoResponse, AppError> {
    crud::create(&state, payload).await
}

#[utoipa::path(
    get,
    path = "/venues",
    tag = "Venues",
    operation_id = "listVenues",
    summary = "List all venues",
    responses(
        (status = 200, description = "All venues in creation order", body = [WithId<Venue>]),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_venues(
    State(state): State<AppState>,
) -> Result<Json<Vec<WithId<Venue>>>, AppError> {
    crud::list(&state).await
}

#[utoipa::path(
    get,
    path = "/venues/{id}",
    tag = "Venues",
    operation_id = "getVenue",
    summary = "Get a venue by ID",
    params(("id" = String, Path, description = "Venue ID (24 hex characters)")),
    responses(
        (status = 200, description = "Venue found", body = WithId<Venue>),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, id), fields(id = %id.0))]
pub async fn get_venue(
    State(state): State<AppState>,
    id: IdPath,
) -> Result<Json<WithId<Venue>>, AppError> {
    crud::get(&state, id.0).await
}

#[utoipa::path(
    put,
    path = "/venues/{id}",
    tag = "Venues",
    operation_id = "updateVenue",
    summary = "Update a venue",
    description = "Partial update: only fields present in the body are changed.",
    params(("id" = String, Path, description = "Venue ID (24 hex characters)")),
    request_body = VenueChanges,
    responses(
        (status = 200, description = "Venue updated", body = MessageResponse),
        (status = 400, description = "Malformed ID or nothing to update (INVALID_IDENTIFIER, VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, id, payload), fields(id = %id.0))]
pub async fn update_venue(
    State(state): State<AppState>,
    id: IdPath,
    AppJson(payload): AppJson<VenueChanges>,
) -> Result<Json<MessageResponse>, AppError> {
    crud::update::<Venue>(&state, id.0, payload).await
}

#[utoipa::path(
    delete,
    path = "/venues/{id}",
    tag = "Venues",
    operation_id = "deleteVenue",
    summary = "Delete a venue",
    description = "Photos attached to the venue are kept.",
    params(("id" = String, Path, description = "Venue ID (24 hex characters)")),
    responses(
        (status = 200, description = "Venue deleted", body = MessageResponse),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, id), fields(id = %id.0))]
pub async fn delete_venue(
    State(state): State<AppState>,
    id: IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    crud::delete::<Venue>(&state, id.0).await
}
