use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

use super::crud;
use crate::error::{AppError, ErrorBody};
use crate::extractors::id::IdPath;
use crate::extractors::json::AppJson;
use crate::models::attendee::{Attendee, AttendeeChanges};
use crate::models::shared::{MessageResponse, WithId};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/attendees",
    tag = "Attendees",
    operation_id = "createAttendee",
    summary = "Create an attendee",
    description = "`phone` is optional.",
    request_body = Attendee,
    responses(
        (status = 201, description = "Attendee created", body = MessageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR, INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_attendee(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Attendee>,
) -> Result<impl IntoResponse, AppError> {
    crud::create(&state, payload).await
}

#[utoipa::path(
    get,
    path = "/attendees",
    tag = "Attendees",
    operation_id = "listAttendees",
    summary = "List all attendees",
    responses(
        (status = 200, description = "All attendees in creation order", body = [WithId<Attendee>]),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_attendees(
    State(state): State<AppState>,
) -> Result<Json<Vec<WithId<Attendee>>>, AppError> {
    crud::list(&state).await
}

#[utoipa::path(
    get,
    path = "/attendees/{id}",
    tag = "Attendees",
    operation_id = "getAttendee",
    summary = "Get an attendee by ID",
    params(("id" = String, Path, description = "Attendee ID (24 hex characters)")),
    responses(
        (status = 200, description = "Attendee found", body = WithId<Attendee>),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "Attendee not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, id), fields(id = %id.0))]
pub async fn get_attendee(
    State(state): State<AppState>,
    id: IdPath,
) -> Result<Json<WithId<Attendee>>, AppError> {
    crud::get(&state, id.0).await
}

#[utoipa::path(
    put,
    path = "/attendees/{id}",
    tag = "Attendees",
    operation_id = "updateAttendee",
    summary = "Update an attendee",
    description = "Partial update: only fields present in the body are changed.",
    params(("id" = String, Path, description = "Attendee ID (24 hex characters)")),
    request_body = AttendeeChanges,
    responses(
        (status = 200, description = "Attendee updated", body = MessageResponse),
        (status = 400, description = "Malformed ID or nothing to update (INVALID_IDENTIFIER, VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Attendee not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, id, payload), fields(id = %id.0))]
pub async fn update_attendee(
    State(state): State<AppState>,
    id: IdPath,
    AppJson(payload): AppJson<AttendeeChanges>,
) -> Result<Json<MessageResponse>, AppError> {
    crud::update::<Attendee>(&state, id.0, payload).await
}

#[utoipa::path(
    delete,
    path = "/attendees/{id}",
    tag = "Attendees",
    operation_id = "deleteAttendee",
    summary = "Delete an attendee",
    description = "Bookings referring to the attendee are kept.",
    params(("id" = String, Path, description = "Attendee ID (24 hex characters)")),
    responses(
        (status = 200, description = "Attendee deleted", body = MessageResponse),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "Attendee not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, id), fields(id = %id.0))]
pub async fn delete_attendee(
    State(state): State<AppState>,
    id: IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    crud::delete::<Attendee>(&state, id.0).await
}
