/// Errors raised by a [`DocumentStore`](super::DocumentStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The connection is not established, has been closed, or an operation
    /// against the backing service failed.
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// A record could not be converted to or from its stored document form.
    #[error("malformed document in '{collection}': {reason}")]
    Malformed { collection: String, reason: String },
}

impl StoreError {
    pub fn malformed(collection: &str, reason: impl ToString) -> Self {
        Self::Malformed {
            collection: collection.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}
