use serde::{Deserialize, Serialize};

use super::resource::Resource;
use super::shared::required_text;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Attendee {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "+44 20 7946 0000")]
    pub phone: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AttendeeChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Resource for Attendee {
    type Changes = AttendeeChanges;

    const COLLECTION: &'static str = "attendees";
    const LABEL: &'static str = "Attendee";

    fn normalize(self) -> Result<Self, AppError> {
        Ok(Self {
            name: required_text(&self.name, "name")?,
            email: required_text(&self.email, "email")?,
            ..self
        })
    }

    fn normalize_changes(mut changes: AttendeeChanges) -> Result<AttendeeChanges, AppError> {
        if let Some(name) = &changes.name {
            changes.name = Some(required_text(name, "name")?);
        }
        if let Some(email) = &changes.email {
            changes.email = Some(required_text(email, "email")?);
        }
        Ok(changes)
    }
}
