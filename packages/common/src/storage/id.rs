use std::fmt;

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A string that does not decode to a [`RecordId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier '{input}': {reason}")]
pub struct InvalidIdentifier {
    pub input: String,
    pub reason: String,
}

/// A 12-byte document identifier, written externally as 24 hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId([u8; 12]);

impl RecordId {
    /// Length of the canonical external form.
    pub const HEX_LEN: usize = 24;

    /// Generate a fresh identifier (timestamp + process-unique counter).
    pub fn generate() -> Self {
        Self(ObjectId::new().bytes())
    }

    /// Parse the external representation. Accepts upper or lower case hex.
    pub fn decode(s: &str) -> Result<Self, InvalidIdentifier> {
        let invalid = |reason: String| InvalidIdentifier {
            input: s.to_string(),
            reason,
        };

        if s.len() != Self::HEX_LEN {
            return Err(invalid(format!(
                "expected {} hex characters, got {}",
                Self::HEX_LEN,
                s.len()
            )));
        }

        let bytes = hex::decode(s).map_err(|e| invalid(format!("invalid hex: {e}")))?;
        let arr: [u8; 12] = bytes
            .try_into()
            .map_err(|_| invalid("decoded to wrong length".into()))?;

        Ok(Self(arr))
    }

    /// Canonical external representation: 24 lowercase hex characters.
    pub fn encode(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<ObjectId> for RecordId {
    fn from(oid: ObjectId) -> Self {
        Self(oid.bytes())
    }
}

impl From<RecordId> for ObjectId {
    fn from(id: RecordId) -> Self {
        ObjectId::from_bytes(id.0)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.encode())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl Serialize for RecordId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::decode(&s).map_err(serde::de::Error::custom)
    }
}
