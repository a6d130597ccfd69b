use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

use super::crud;
use crate::error::{AppError, ErrorBody};
use crate::extractors::id::IdPath;
use crate::extractors::json::AppJson;
use crate::models::event::{Event, EventChanges};
use crate::models::shared::{MessageResponse, WithId};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/events",
    tag = "Events",
    operation_id = "createEvent",
    summary = "Create an event",
    description = "`venue_id` must be a well-formed ID; the venue itself is not looked up.",
    request_body = Event,
    responses(
        (status = 201, description = "Event created", body = MessageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR, INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_event(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Event>,
) -> Result<impl IntoResponse, AppError> {
    crud::create(&state, payload).await
}

#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    operation_id = "listEvents",
    summary = "List all events",
    responses(
        (status = 200, description = "All events in creation order", body = [WithId<Event>]),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<WithId<Event>>>, AppError> {
    crud::list(&state).await
}

#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "Events",
    operation_id = "getEvent",
    summary = "Get an event by ID",
    params(("id" = String, Path, description = "Event ID (24 hex characters)")),
    responses(
        (status = 200, description = "Event found", body = WithId<Event>),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, id), fields(id = %id.0))]
pub async fn get_event(
    State(state): State<AppState>,
    id: IdPath,
) -> Result<Json<WithId<Event>>, AppError> {
    crud::get(&state, id.0).await
}

#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "Events",
    operation_id = "updateEvent",
    summary = "Update an event",
    description = "Partial update: only fields present in the body are changed.",
    params(("id" = String, Path, description = "Event ID (24 hex characters)")),
    request_body = EventChanges,
    responses(
        (status = 200, description = "Event updated", body = MessageResponse),
        (status = 400, description = "Malformed ID or nothing to update (INVALID_IDENTIFIER, VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, id, payload), fields(id = %id.0))]
pub async fn update_event(
    State(state): State<AppState>,
    id: IdPath,
    AppJson(payload): AppJson<EventChanges>,
) -> Result<Json<MessageResponse>, AppError> {
    crud::update::<Event>(&state, id.0, payload).await
}

#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "Events",
    operation_id = "deleteEvent",
    summary = "Delete an event",
    description = "Posters and promotional videos attached to the event are kept.",
    params(("id" = String, Path, description = "Event ID (24 hex characters)")),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, id), fields(id = %id.0))]
pub async fn delete_event(
    State(state): State<AppState>,
    id: IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    crud::delete::<Event>(&state, id.0).await
}
