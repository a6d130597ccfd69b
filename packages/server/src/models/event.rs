use serde::{Deserialize, Serialize};

use super::resource::Resource;
use super::shared::{canonical_reference, required_text, validate_non_negative};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Event {
    #[schema(example = "RustConf 2026")]
    pub name: String,
    #[schema(example = "Annual Rust conference")]
    pub description: String,
    /// Free-form date as entered by the organizer.
    #[schema(example = "2026-09-10")]
    pub date: String,
    /// Venue hosting the event.
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub venue_id: String,
    #[schema(example = 500, minimum = 0)]
    pub max_attendees: i64,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EventChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0)]
    pub max_attendees: Option<i64>,
}

impl Resource for Event {
    type Changes = EventChanges;

    const COLLECTION: &'static str = "events";
    const LABEL: &'static str = "Event";

    fn normalize(self) -> Result<Self, AppError> {
        validate_non_negative(self.max_attendees, "max_attendees")?;
        Ok(Self {
            name: required_text(&self.name, "name")?,
            venue_id: canonical_reference(&self.venue_id)?,
            ..self
        })
    }

    fn normalize_changes(mut changes: EventChanges) -> Result<EventChanges, AppError> {
        if let Some(max) = changes.max_attendees {
            validate_non_negative(max, "max_attendees")?;
        }
        if let Some(name) = &changes.name {
            changes.name = Some(required_text(name, "name")?);
        }
        if let Some(venue_id) = &changes.venue_id {
            changes.venue_id = Some(canonical_reference(venue_id)?);
        }
        Ok(changes)
    }
}
