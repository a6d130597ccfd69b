use serde::{Deserialize, Serialize};

use super::resource::Resource;
use super::shared::{required_text, validate_non_negative};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Venue {
    #[schema(example = "Main Hall")]
    pub name: String,
    #[schema(example = "1 Conference Way")]
    pub address: String,
    #[schema(example = 1200, minimum = 0)]
    pub capacity: i64,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VenueChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0)]
    pub capacity: Option<i64>,
}

impl Resource for Venue {
    type Changes = VenueChanges;

    const COLLECTION: &'static str = "venues";
    const LABEL: &'static str = "Venue";

    fn normalize(self) -> Result<Self, AppError> {
        validate_non_negative(self.capacity, "capacity")?;
        Ok(Self {
            name: required_text(&self.name, "name")?,
            ..self
        })
    }

    fn normalize_changes(mut changes: VenueChanges) -> Result<VenueChanges, AppError> {
        if let Some(capacity) = changes.capacity {
            validate_non_negative(capacity, "capacity")?;
        }
        if let Some(name) = &changes.name {
            changes.name = Some(required_text(name, "name")?);
        }
        Ok(changes)
    }
}
