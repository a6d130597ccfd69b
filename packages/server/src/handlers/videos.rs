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
    path = "/upload_promotional_video/{event_id}",
    tag = "Promotional Videos",
    operation_id = "uploadPromotionalVideo",
    summary = "Upload a promotional video for an event",
    description = "Stores the `file` multipart part as a new promotional video. The whole video \
        must fit in a single document; anything larger is rejected without writing.",
    params(("event_id" = String, Path, description = "Event ID (24 hex characters)")),
    request_body(content_type = "multipart/form-data", description = "Video in the `file` part"),
    responses(
        (status = 201, description = "Video stored", body = MessageResponse),
        (status = 400, description = "Malformed ID, missing file or oversized payload (INVALID_IDENTIFIER, VALIDATION_ERROR, PAYLOAD_TOO_LARGE)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_promotional_video(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    assets::upload(&state, AssetKind::PromotionalVideo, event_id, multipart).await
}

#[utoipa::path(
    get,
    path = "/promotional_video/{event_id}",
    tag = "Promotional Videos",
    operation_id = "getPromotionalVideoMetadata",
    summary = "Get the latest promotional video metadata for an event",
    params(("event_id" = String, Path, description = "Event ID (24 hex characters)")),
    responses(
        (status = 200, description = "Video metadata", body = AssetMetadataResponse),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "No video for this event (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_promotional_video_metadata(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<AssetMetadataResponse>, AppError> {
    assets::latest_metadata(&state, AssetKind::PromotionalVideo, &event_id).await
}

#[utoipa::path(
    get,
    path = "/promotional_video/file/{video_id}",
    tag = "Promotional Videos",
    operation_id = "getPromotionalVideoFile",
    summary = "Download a promotional video",
    description = "Streams the video in fixed-size chunks with its stored content type.",
    params(("video_id" = String, Path, description = "Video ID (24 hex characters)")),
    responses(
        (status = 200, description = "Video content"),
        (status = 304, description = "Not Modified (ETag match)"),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "Video not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, headers))]
pub async fn get_promotional_video_file(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    assets::file_response(&state, AssetKind::PromotionalVideo, &video_id, &headers).await
}
