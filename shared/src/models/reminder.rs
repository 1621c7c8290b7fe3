//! Reminder model
//!
//! A reminder ties a booking to one scheduled local notification. The
//! invariant is at most one live reminder per booking id; the scheduler in
//! the client crate enforces it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Booking;

/// How long before the reservation start the notification fires
pub const REMINDER_LEAD_MINUTES: i64 = 60;

/// A scheduled local notification for a booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub booking_id: Uuid,
    /// Opaque id issued by the OS notification service
    pub notification_id: String,
    pub fire_at: DateTime<Utc>,
}

impl Reminder {
    pub fn new(booking_id: Uuid, notification_id: impl Into<String>, fire_at: DateTime<Utc>) -> Self {
        Self {
            booking_id,
            notification_id: notification_id.into(),
            fire_at,
        }
    }

    /// The fire time for a booking given a lead duration
    pub fn fire_at_for(booking: &Booking, lead: Duration) -> DateTime<Utc> {
        booking.load_in - lead
    }

    pub fn default_lead() -> Duration {
        Duration::minutes(REMINDER_LEAD_MINUTES)
    }
}
