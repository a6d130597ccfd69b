use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use common::storage::RecordId;

use crate::error::AppError;

/// A single `{id}` path segment decoded into a [`RecordId`].
///
/// Malformed ids are rejected with `INVALID_IDENTIFIER` before the handler
/// runs.
pub struct IdPath(pub RecordId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(IdPath(RecordId::decode(&raw)?))
    }
}
