use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use common::asset::AssetKind;
use tracing::instrument;

use super::assets;
use crate::error::{AppError, ErrorBody};
use crate::models::asset::AssetMetadataResponse;
use crate::models::shared::MessageResponse;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/upload_event_poster/{event_id}",
    tag = "Event Posters",
    operation_id = "uploadEventPoster",
    summary = "Upload a poster for an event",
    description = "Stores the `file` multipart part as a new poster. Every upload creates a new \
        record; the event is not checked for existence. Payloads above the document ceiling \
        are rejected without writing anything.",
    params(("event_id" = String, Path, description = "Event ID (24 hex characters)")),
    request_body(content_type = "multipart/form-data", description = "Poster image in the `file` part"),
    responses(
        (status = 201, description = "Poster stored", body = MessageResponse),
        (status = 400, description = "Malformed ID, missing file or oversized payload (INVALID_IDENTIFIER, VALIDATION_ERROR, PAYLOAD_TOO_LARGE)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_event_poster(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    assets::upload(&state, AssetKind::EventPoster, event_id, multipart).await
}

#[utoipa::path(
    get,
    path = "/event_poster/{event_id}",
    tag = "Event Posters",
    operation_id = "getEventPosterMetadata",
    summary = "Get the latest poster metadata for an event",
    description = "Returns the most recently uploaded poster for the event, without its content.",
    params(("event_id" = String, Path, description = "Event ID (24 hex characters)")),
    responses(
        (status = 200, description = "Poster metadata", body = AssetMetadataResponse),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "No poster for this event (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_event_poster_metadata(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<AssetMetadataResponse>, AppError> {
    assets::latest_metadata(&state, AssetKind::EventPoster, &event_id).await
}

#[utoipa::path(
    get,
    path = "/event_poster/file/{poster_id}",
    tag = "Event Posters",
    operation_id = "getEventPosterFile",
    summary = "Download a poster",
    description = "Streams the poster content with its stored content type. Supports ETag-based \
        caching via If-None-Match.",
    params(("poster_id" = String, Path, description = "Poster ID (24 hex characters)")),
    responses(
        (status = 200, description = "Poster content"),
        (status = 304, description = "Not Modified (ETag match)"),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "Poster not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, headers))]
pub async fn get_event_poster_file(
    State(state): State<AppState>,
    Path(poster_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    assets::file_response(&state, AssetKind::EventPoster, &poster_id, &headers).await
}
