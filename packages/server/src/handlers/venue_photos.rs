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
    path = "/upload_venue_photo/{venue_id}",
    tag = "Venue Photos",
    operation_id = "uploadVenuePhoto",
    summary = "Upload a photo of a venue",
    description = "Stores the `file` multipart part as a new venue photo. A venue can have any \
        number of photos.",
    params(("venue_id" = String, Path, description = "Venue ID (24 hex characters)")),
    request_body(content_type = "multipart/form-data", description = "Photo in the `file` part"),
    responses(
        (status = 201, description = "Photo stored", body = MessageResponse),
        (status = 400, description = "Malformed ID, missing file or oversized payload (INVALID_IDENTIFIER, VALIDATION_ERROR, PAYLOAD_TOO_LARGE)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_venue_photo(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    assets::upload(&state, AssetKind::VenuePhoto, venue_id, multipart).await
}

#[utoipa::path(
    get,
    path = "/venue_photos/{venue_id}",
    tag = "Venue Photos",
    operation_id = "listVenuePhotos",
    summary = "List photo metadata for a venue",
    description = "Returns every photo of the venue, newest first, without content. A venue \
        without photos yields an empty list.",
    params(("venue_id" = String, Path, description = "Venue ID (24 hex characters)")),
    responses(
        (status = 200, description = "Photo metadata", body = Vec<AssetMetadataResponse>),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_venue_photos(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> Result<Json<Vec<AssetMetadataResponse>>, AppError> {
    assets::list_metadata(&state, AssetKind::VenuePhoto, &venue_id).await
}

#[utoipa::path(
    get,
    path = "/venue_photo/file/{photo_id}",
    tag = "Venue Photos",
    operation_id = "getVenuePhotoFile",
    summary = "Download a venue photo",
    params(("photo_id" = String, Path, description = "Photo ID (24 hex characters)")),
    responses(
        (status = 200, description = "Photo content"),
        (status = 304, description = "Not Modified (ETag match)"),
        (status = 400, description = "Malformed ID (INVALID_IDENTIFIER)", body = ErrorBody),
        (status = 404, description = "Photo not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Database unavailable (STORE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, headers))]
pub async fn get_venue_photo_file(
    State(state): State<AppState>,
    Path(photo_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    assets::file_response(&state, AssetKind::VenuePhoto, &photo_id, &headers).await
}
