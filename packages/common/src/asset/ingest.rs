use bson::Binary;
use bson::spec::BinarySubtype;
use bytes::Bytes;
use chrono::Utc;
use futures::{Stream, StreamExt};
use tracing::{info, warn};

use crate::storage::RecordId;

use super::error::AssetError;
use super::guard::{self, MAX_DOCUMENT_PAYLOAD_BYTES};
use super::service::AssetService;
use super::{AssetKind, AssetRecord};

/// Declared properties of an incoming upload.
#[derive(Debug, Clone)]
pub struct Upload {
    pub kind: AssetKind,
    /// Owner id as received from the client; decoded before anything is read.
    pub owner_id: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl AssetService {
    /// Buffer `body`, check it against the payload ceiling and commit it as
    /// one new asset document.
    ///
    /// Nothing is written unless the whole body was read and fits. Every call
    /// creates a new record, including repeated uploads for the same owner.
    pub async fn ingest<S, E>(&self, upload: Upload, body: S) -> Result<RecordId, AssetError>
    where
        S: Stream<Item = Result<Bytes, E>> + Send,
        E: Into<AssetError>,
    {
        let owner = RecordId::decode(&upload.owner_id)?;

        let (payload, total) = materialize(body).await?;
        if let Err(e) = guard::check(total) {
            warn!(
                kind = ?upload.kind,
                owner_id = %owner,
                size = total,
                limit = e.limit,
                "Rejected oversized upload"
            );
            return Err(e.into());
        }

        let filename = upload
            .filename
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| upload.kind.default_filename().to_string());
        let content_type =
            resolve_content_type(upload.kind, upload.content_type.as_deref(), &filename);

        let record = AssetRecord {
            owner_id: owner.encode(),
            owner_kind: upload.kind,
            filename,
            content_type,
            size: i64::try_from(total).unwrap_or(i64::MAX),
            uploaded_at: Utc::now(),
            payload: Binary {
                subtype: BinarySubtype::Generic,
                bytes: payload,
            },
        };

        let id = self.collection(upload.kind).insert(&record).await?;
        info!(
            kind = ?upload.kind,
            owner_id = %owner,
            asset_id = %id,
            size = total,
            "Stored asset"
        );
        Ok(id)
    }
}

/// Read the whole body. Bytes past the ceiling are counted but not kept, so
/// the caller learns the full length without holding more than the ceiling.
async fn materialize<S, E>(body: S) -> Result<(Vec<u8>, u64), AssetError>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Into<AssetError>,
{
    let mut body = std::pin::pin!(body);
    let mut buf = Vec::new();
    let mut total: u64 = 0;

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(Into::into)?;
        total += chunk.len() as u64;
        if total <= MAX_DOCUMENT_PAYLOAD_BYTES {
            buf.extend_from_slice(&chunk);
        } else if !buf.is_empty() {
            buf = Vec::new();
        }
    }

    Ok((buf, total))
}

/// Declared type if present, else a guess from the file extension, else the
/// kind's default. Content is never sniffed.
fn resolve_content_type(kind: AssetKind, declared: Option<&str>, filename: &str) -> String {
    declared
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| mime_guess::from_path(filename).first().map(|m| m.to_string()))
        .unwrap_or_else(|| kind.default_content_type().to_string())
}
