//! Binary assets attached to events and venues.
//!
//! Each asset is one document holding its metadata and the full payload.
//! Uploads are buffered, checked against [`guard::MAX_DOCUMENT_PAYLOAD_BYTES`]
//! and committed with a single insert. Downloads are served as an
//! [`AssetStream`] of fixed-size chunks.

mod error;
mod ingest;
mod retrieve;
mod service;
mod stream;

pub mod guard;

use std::fmt;

use bson::Binary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use error::AssetError;
pub use guard::{MAX_DOCUMENT_PAYLOAD_BYTES, PayloadTooLarge};
pub use ingest::Upload;
pub use retrieve::AssetFile;
pub use service::AssetService;
pub use stream::{AssetStream, DEFAULT_CHUNK_SIZE};

/// What an asset is attached to, and therefore which collection holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    EventPoster,
    PromotionalVideo,
    VenuePhoto,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [
        AssetKind::EventPoster,
        AssetKind::PromotionalVideo,
        AssetKind::VenuePhoto,
    ];

    pub fn collection(self) -> &'static str {
        match self {
            AssetKind::EventPoster => "event_posters",
            AssetKind::PromotionalVideo => "promotional_videos",
            AssetKind::VenuePhoto => "venue_photos",
        }
    }

    /// Used when the upload neither declares a type nor has a recognizable
    /// file extension.
    pub fn default_content_type(self) -> &'static str {
        match self {
            AssetKind::EventPoster | AssetKind::VenuePhoto => "image/jpeg",
            AssetKind::PromotionalVideo => "video/mp4",
        }
    }

    pub fn default_filename(self) -> &'static str {
        match self {
            AssetKind::EventPoster => "poster",
            AssetKind::PromotionalVideo => "video",
            AssetKind::VenuePhoto => "photo",
        }
    }

    /// The kind of record that owns assets of this kind.
    pub fn owner_label(self) -> &'static str {
        match self {
            AssetKind::EventPoster | AssetKind::PromotionalVideo => "event",
            AssetKind::VenuePhoto => "venue",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetKind::EventPoster => "Event poster",
            AssetKind::PromotionalVideo => "Promotional video",
            AssetKind::VenuePhoto => "Venue photo",
        })
    }
}

/// Stored form of an asset. Write-once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Canonical hex id of the owning event or venue. Not checked for existence.
    pub owner_id: String,
    pub owner_kind: AssetKind,
    /// Client-declared name; only ever echoed back in response headers.
    pub filename: String,
    pub content_type: String,
    /// Payload length in bytes.
    pub size: i64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub uploaded_at: DateTime<Utc>,
    pub payload: Binary,
}

/// An [`AssetRecord`] read without its payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetMetadata {
    pub owner_id: String,
    pub owner_kind: AssetKind,
    pub filename: String,
    pub content_type: String,
    pub size: i64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub uploaded_at: DateTime<Utc>,
}

/// Stored field holding the payload bytes.
pub(crate) const PAYLOAD_FIELD: &str = "payload";

/// Stored field holding the owner id.
pub(crate) const OWNER_FIELD: &str = "owner_id";
