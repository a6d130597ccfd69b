use chrono::{DateTime, Utc};
use common::asset::{AssetKind, AssetMetadata};
use common::storage::Stored;
use serde::Serialize;

/// Response DTO for asset metadata. The payload itself is only served by the
/// file endpoints.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AssetMetadataResponse {
    /// Asset ID; pass it to the matching `/file/{id}` endpoint.
    #[schema(example = "65f1c0e2a1b2c3d4e5f60718")]
    pub id: String,
    /// Event or venue the asset is attached to.
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub owner_id: String,
    #[schema(value_type = String, example = "event_poster")]
    pub owner_kind: AssetKind,
    #[schema(example = "poster.jpg")]
    pub filename: String,
    #[schema(example = "image/jpeg")]
    pub content_type: String,
    /// Payload size in bytes.
    #[schema(example = 142857)]
    pub size: i64,
    pub uploaded_at: DateTime<Utc>,
}

impl From<Stored<AssetMetadata>> for AssetMetadataResponse {
    fn from(stored: Stored<AssetMetadata>) -> Self {
        let meta = stored.record;
        Self {
            id: stored.id.encode(),
            owner_id: meta.owner_id,
            owner_kind: meta.owner_kind,
            filename: meta.filename,
            content_type: meta.content_type,
            size: meta.size,
            uploaded_at: meta.uploaded_at,
        }
    }
}
