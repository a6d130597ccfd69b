use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

use super::crud;
use crate::error::{AppError, ErrorBody};
use crate::extractors::id::IdPath;
use crate::extractors::json::AppJson;
use crate::models::booking::{Booking, BookingChanges};
use crate::models::shared::{MessageResponse, WithId};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/bookings",
    tag = "Bookings",
    operation_id = "createBooking",
    summary = "Create a booking",
    description = "`event_id` and `attendee_id` must be well-formed IDs; the referenced records are not looked up.",
    request_body = Booking,
    responses(
        (status = 201, description = "Booking created", body = MessageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR, INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_booking(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Booking>,
) -> Result<impl IntoResponse, AppError> {
    crud::create(&state, payload).await
}

#[utoipa::path(
    get,
    path = "/bookings",
    tag = "Bookings",
    operation_id = "listBookings",
    summary = "List all bookings",
    responses(
        (status = 200, description = "All bookings in creation order", body = [WithId<Booking>]),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<WithId<Booking>>>, AppError> {
    crud::list(&state).await
}

#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "Bookings",
    operation_id = "getBooking",
    summary = "Get a booking by ID",
    params(("id" = String, Path, description = "Booking ID (24 hex characters)")),
    responses(
        (status = 200, description = "Booking found", body = WithId<Booking>),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "Booking not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, id), fields(id = %id.0))]
pub async fn get_booking(
    State(state): State<AppState>,
    id: IdPath,
) -> Result<Json<WithId<Booking>>, AppError> {
    crud::get(&state, id.0).await
}

#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "Bookings",
    operation_id = "updateBooking",
    summary = "Update a booking",
    description = "Partial update: only fields present in the body are changed.",
    params(("id" = String, Path, description = "Booking ID (24 hex characters)")),
    request_body = BookingChanges,
    responses(
        (status = 200, description = "Booking updated", body = MessageResponse),
        (status = 400, description = "Malformed ID or nothing to update (INVALID_IDENTIFIER, VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Booking not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, id, payload), fields(id = %id.0))]
pub async fn update_booking(
    State(state): State<AppState>,
    id: IdPath,
    AppJson(payload): AppJson<BookingChanges>,
) -> Result<Json<MessageResponse>, AppError> {
    crud::update::<Booking>(&state, id.0, payload).await
}

#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "Bookings",
    operation_id = "deleteBooking",
    summary = "Delete a booking",
    description = "Removes the booking only.",
    params(("id" = String, Path, description = "Booking ID (24 hex characters)")),
    responses(
        (status = 200, description = "Booking deleted", body = MessageResponse),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "Booking not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, id), fields(id = %id.0))]
pub async fn delete_booking(
    State(state): State<AppState>,
    id: IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    crud::delete::<Booking>(&state, id.0).await
}
