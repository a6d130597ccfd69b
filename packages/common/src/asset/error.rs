use crate::storage::{InvalidIdentifier, StoreError};

use super::guard::PayloadTooLarge;

/// Outcome of a failed asset operation.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// A client-supplied identifier is not well formed.
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),

    /// A well-formed identifier resolved to nothing in the expected collection.
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    PayloadTooLarge(#[from] PayloadTooLarge),

    /// The incoming byte stream failed before it was fully read.
    #[error("upload failed: {0}")]
    Upload(String),

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}
