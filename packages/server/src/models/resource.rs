use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A record kind exposed through the generic CRUD endpoints.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Partial update body. Every field is optional and unset fields must
    /// serialize to nothing.
    type Changes: Serialize + DeserializeOwned + Send + Sync + 'static;

    const COLLECTION: &'static str;
    /// Capitalized singular name used in response messages.
    const LABEL: &'static str;

    /// Validate a create body and bring it into stored form.
    fn normalize(self) -> Result<Self, AppError>;

    /// Validate the fields present in an update body.
    fn normalize_changes(changes: Self::Changes) -> Result<Self::Changes, AppError>;
}
