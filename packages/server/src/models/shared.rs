use common::storage::RecordId;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Acknowledgement returned by create, update, delete and upload endpoints.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Event created")]
    pub message: String,
    /// ID of the record the operation applied to.
    #[schema(example = "65f1c0e2a1b2c3d4e5f60718")]
    pub id: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>, id: RecordId) -> Self {
        Self {
            message: message.into(),
            id: id.encode(),
        }
    }
}

/// A stored record together with its ID.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct WithId<T> {
    #[schema(example = "65f1c0e2a1b2c3d4e5f60718")]
    pub id: String,
    #[serde(flatten)]
    pub record: T,
}

/// Validate a count-like field (must be >= 0).
pub fn validate_non_negative(value: i64, name: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::Validation(format!("{name} must be >= 0")));
    }
    Ok(())
}

/// Validate a reference to another record and return its canonical form.
///
/// Only the format is checked; the referenced record may not exist.
pub fn canonical_reference(value: &str) -> Result<String, AppError> {
    Ok(RecordId::decode(value.trim())?.encode())
}

/// Trim a required text field and reject it if nothing is left.
pub fn required_text(value: &str, name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }
    Ok(trimmed.to_string())
}
