//! Upper bound on stored asset payloads.
//!
//! An asset is persisted as a single document, so its payload plus metadata
//! must fit under the store's per-document ceiling. The guard is evaluated on
//! the full payload length before anything is written.

/// Largest document the store accepts.
pub const MAX_DOCUMENT_BYTES: u64 = 16 * 1024 * 1024;

/// Reserved for the non-payload fields of an asset document.
pub const METADATA_HEADROOM_BYTES: u64 = 64 * 1024;

/// Largest payload an asset may carry.
pub const MAX_DOCUMENT_PAYLOAD_BYTES: u64 = MAX_DOCUMENT_BYTES - METADATA_HEADROOM_BYTES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("payload exceeds the maximum size of {limit} bytes")]
pub struct PayloadTooLarge {
    pub limit: u64,
}

/// Reject payloads longer than [`MAX_DOCUMENT_PAYLOAD_BYTES`].
pub fn check(byte_length: u64) -> Result<(), PayloadTooLarge> {
    if byte_length > MAX_DOCUMENT_PAYLOAD_BYTES {
        return Err(PayloadTooLarge {
            limit: MAX_DOCUMENT_PAYLOAD_BYTES,
        });
    }
    Ok(())
}
