use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::storage::{RecordId, Stored};

use super::error::AssetError;
use super::service::AssetService;
use super::stream::AssetStream;
use super::{AssetKind, AssetMetadata, OWNER_FIELD, PAYLOAD_FIELD};

/// A stored asset ready to be sent to a client.
#[derive(Debug)]
pub struct AssetFile {
    pub id: RecordId,
    pub filename: String,
    pub content_type: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub body: AssetStream,
}

impl AssetService {
    /// Metadata of every asset of `kind` owned by `owner_id`, newest upload
    /// first. Records uploaded at the same instant keep the later insertion
    /// first. An owner without assets yields an empty list.
    pub async fn list_for_owner(
        &self,
        kind: AssetKind,
        owner_id: &str,
    ) -> Result<Vec<Stored<AssetMetadata>>, AssetError> {
        let mut assets = self.metadata_in_insertion_order(kind, owner_id).await?;
        assets.reverse();
        assets.sort_by(|a, b| b.record.uploaded_at.cmp(&a.record.uploaded_at));
        Ok(assets)
    }

    /// Metadata of the most recently uploaded asset of `kind` for `owner_id`.
    ///
    /// Several assets may exist for one owner; the one with the latest
    /// `uploaded_at` wins, and among equal timestamps the later insertion.
    pub async fn latest_for_owner(
        &self,
        kind: AssetKind,
        owner_id: &str,
    ) -> Result<Stored<AssetMetadata>, AssetError> {
        self.metadata_in_insertion_order(kind, owner_id)
            .await?
            .into_iter()
            .max_by_key(|a| a.record.uploaded_at)
            .ok_or_else(|| {
                AssetError::NotFound(format!(
                    "No {} found for {} {owner_id}",
                    kind.to_string().to_lowercase(),
                    kind.owner_label()
                ))
            })
    }

    /// Load one asset and hand its payload back as a chunked stream.
    ///
    /// Headers are built from the stored record only.
    pub async fn get_file_by_id(&self, kind: AssetKind, id: &str) -> Result<AssetFile, AssetError> {
        let record_id = RecordId::decode(id)?;

        let stored = self
            .collection(kind)
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| AssetError::NotFound(format!("{kind} with ID {id} not found")))?;

        let record = stored.record;
        let payload = Bytes::from(record.payload.bytes);
        Ok(AssetFile {
            id: stored.id,
            filename: record.filename,
            content_type: record.content_type,
            size: payload.len() as u64,
            uploaded_at: record.uploaded_at,
            body: AssetStream::new(payload, self.chunk_size),
        })
    }

    async fn metadata_in_insertion_order(
        &self,
        kind: AssetKind,
        owner_id: &str,
    ) -> Result<Vec<Stored<AssetMetadata>>, AssetError> {
        let owner = RecordId::decode(owner_id)?;
        Ok(self
            .collection(kind)
            .find_all_by_field(OWNER_FIELD, owner.encode(), &[PAYLOAD_FIELD])
            .await?)
    }
}
