//! Local notification gateway
//!
//! The OS notification service is fire-and-forget: scheduling returns an
//! opaque id, cancellation takes it back, and there is no delivery
//! confirmation. Platform bindings implement this trait; tests substitute a
//! recording double.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use shared::models::Booking;

/// Content of a scheduled reminder notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub booking_id: Uuid,
    pub title: String,
    pub body: String,
}

impl NotificationPayload {
    /// Build the reminder content for a booking
    pub fn for_booking(booking: &Booking) -> Self {
        Self {
            booking_id: booking.id,
            title: format!("Upcoming reservation at {}", booking.restaurant.title),
            body: format!(
                "Table for {} at {}",
                booking.guests,
                booking.load_in.format("%H:%M, %B %e")
            ),
        }
    }
}

/// Seam over the platform's local notification API
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Schedule a notification at an absolute time; returns the platform's
    /// notification id
    async fn schedule_at(
        &self,
        fire_at: DateTime<Utc>,
        payload: NotificationPayload,
    ) -> AppResult<String>;

    /// Cancel a previously scheduled notification
    async fn cancel(&self, notification_id: &str) -> AppResult<()>;
}

#[async_trait]
impl<G: NotificationGateway + ?Sized> NotificationGateway for std::sync::Arc<G> {
    async fn schedule_at(
        &self,
        fire_at: DateTime<Utc>,
        payload: NotificationPayload,
    ) -> AppResult<String> {
        (**self).schedule_at(fire_at, payload).await
    }

    async fn cancel(&self, notification_id: &str) -> AppResult<()> {
        (**self).cancel(notification_id).await
    }
}
