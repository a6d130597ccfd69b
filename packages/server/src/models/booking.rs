use serde::{Deserialize, Serialize};

use super::resource::Resource;
use super::shared::{canonical_reference, validate_non_negative};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Booking {
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub event_id: String,
    #[schema(example = "507f191e810c19729de860ea")]
    pub attendee_id: String,
    #[schema(example = "VIP")]
    pub ticket_type: String,
    #[schema(example = 2, minimum = 0)]
    pub quantity: i64,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookingChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(minimum = 0)]
    pub quantity: Option<i64>,
}

impl Resource for Booking {
    type Changes = BookingChanges;

    const COLLECTION: &'static str = "bookings";
    const LABEL: &'static str = "Booking";

    fn normalize(self) -> Result<Self, AppError> {
        validate_non_negative(self.quantity, "quantity")?;
        Ok(Self {
            event_id: canonical_reference(&self.event_id)?,
            attendee_id: canonical_reference(&self.attendee_id)?,
            ..self
        })
    }

    fn normalize_changes(mut changes: BookingChanges) -> Result<BookingChanges, AppError> {
        if let Some(quantity) = changes.quantity {
            validate_non_negative(quantity, "quantity")?;
        }
        if let Some(event_id) = &changes.event_id {
            changes.event_id = Some(canonical_reference(event_id)?);
        }
        if let Some(attendee_id) = &changes.attendee_id {
            changes.attendee_id = Some(canonical_reference(attendee_id)?);
        }
        Ok(changes)
    }
}
