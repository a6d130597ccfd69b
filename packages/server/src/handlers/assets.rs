//! Shared plumbing for the poster, video and venue photo endpoints.

use std::fmt::Write;

use axum::Json;
use axum::body::Body;
use axum::extract::multipart::MultipartError;
use axum::extract::{DefaultBodyLimit, Multipart};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use common::asset::{AssetError, AssetKind, MAX_DOCUMENT_PAYLOAD_BYTES, PayloadTooLarge, Upload};
use futures::TryStreamExt;

use crate::error::AppError;
use crate::models::asset::AssetMetadataResponse;
use crate::models::shared::MessageResponse;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the payload.
const MULTIPART_OVERHEAD_BYTES: u64 = 64 * 1024;

/// Multipart field that carries the uploaded file.
const FILE_FIELD: &str = "file";

pub fn upload_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max((MAX_DOCUMENT_PAYLOAD_BYTES + MULTIPART_OVERHEAD_BYTES) as usize)
}

/// Ingest the `file` part of a multipart request as a new asset of `kind`.
pub(crate) async fn upload(
    state: &AppState,
    kind: AssetKind,
    owner_id: String,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let upload = Upload {
            kind,
            owner_id,
            filename: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
        };
        let id = state
            .assets
            .ingest(upload, field.map_err(multipart_error))
            .await?;

        return Ok((
            StatusCode::CREATED,
            Json(MessageResponse::new(format!("{kind} uploaded"), id)),
        ));
    }

    Err(AppError::Validation("Missing 'file' field".into()))
}

pub(crate) async fn latest_metadata(
    state: &AppState,
    kind: AssetKind,
    owner_id: &str,
) -> Result<Json<AssetMetadataResponse>, AppError> {
    let latest = state.assets.latest_for_owner(kind, owner_id).await?;
    Ok(Json(latest.into()))
}

pub(crate) async fn list_metadata(
    state: &AppState,
    kind: AssetKind,
    owner_id: &str,
) -> Result<Json<Vec<AssetMetadataResponse>>, AppError> {
    let assets = state.assets.list_for_owner(kind, owner_id).await?;
    Ok(Json(assets.into_iter().map(Into::into).collect()))
}

/// Stream a stored asset back to the client.
///
/// Records are write-once, so the record id doubles as a strong ETag.
pub(crate) async fn file_response(
    state: &AppState,
    kind: AssetKind,
    id: &str,
    headers: &HeaderMap,
) -> Result<Response, AppError> {
    let file = state.assets.get_file_by_id(kind, id).await?;

    let etag = format!("\"{}\"", file.id);
    if if_none_match_hits(headers, &etag) {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let disposition = content_disposition_value(&file.filename, kind.default_filename());
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, file.content_type),
            (header::CONTENT_DISPOSITION, disposition),
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=3600".to_string()),
        ],
        Body::from_stream(file.body),
    )
        .into_response())
}

/// Whether `If-None-Match` names `etag`. Accepts `*`, comma-separated
/// lists and weak validators.
fn if_none_match_hits(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .any(|tag| tag == "*" || tag.strip_prefix("W/").unwrap_or(tag) == etag)
}

/// Errors from the multipart reader. Tripping the request body limit is
/// reported the same way as an oversized payload.
fn multipart_error(err: MultipartError) -> AssetError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        PayloadTooLarge {
            limit: MAX_DOCUMENT_PAYLOAD_BYTES,
        }
        .into()
    } else {
        AssetError::Upload(err.body_text())
    }
}

/// Build an `inline` `Content-Disposition` value with an ASCII fallback name
/// and an RFC 5987 `filename*` carrying the original bytes.
fn content_disposition_value(filename: &str, fallback: &str) -> String {
    let mut quoted: String = filename
        .chars()
        .filter(|c| c.is_ascii_graphic() && !matches!(c, '"' | ';' | '\\'))
        .collect();
    if quoted.is_empty() {
        quoted = fallback.to_string();
    }

    let mut value = format!("inline; filename=\"{quoted}\"; filename*=UTF-8''");
    for byte in filename.bytes() {
        if is_attr_char(byte) {
            value.push(char::from(byte));
        } else {
            let _ = write!(value, "%{byte:02X}");
        }
    }
    value
}

/// `attr-char` from RFC 5987: passed through `filename*` unescaped.
fn is_attr_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte)
}
