mod collection;
mod error;
mod id;
mod traits;

pub mod memory;
#[cfg(feature = "mongodb")]
pub mod mongo;

pub use collection::{Collection, Stored};
pub use error::StoreError;
pub use id::{InvalidIdentifier, RecordId};
pub use traits::{DocumentStore, DocumentStream};
