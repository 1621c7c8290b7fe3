//! Booking models
//!
//! A `BookingDraft` is what the user edits; a `Booking` is what the backend
//! returns once a draft is accepted. Whether a booking is "upcoming" or
//! "past" is derived from `load_in` at read time, never stored.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::RestaurantSnapshot;

/// Default reservation length when the caller does not override it
pub const DEFAULT_DURATION_HOURS: i64 = 2;

/// Contact details attached to a reservation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A reservation request being assembled by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub restaurant_id: Uuid,
    pub customer: CustomerInfo,
    pub guests: u32,
    pub load_in: DateTime<Utc>,
    pub load_out: DateTime<Utc>,
    pub is_special_occasion: bool,
    #[serde(default)]
    pub event_special: String,
    pub special_accommodations: bool,
    #[serde(default)]
    pub note: String,
}

impl BookingDraft {
    /// Start a draft for one guest with the default two-hour window
    pub fn new(restaurant_id: Uuid, customer: CustomerInfo, load_in: DateTime<Utc>) -> Self {
        Self {
            restaurant_id,
            customer,
            guests: 1,
            load_in,
            load_out: load_in + Duration::hours(DEFAULT_DURATION_HOURS),
            is_special_occasion: false,
            event_special: String::new(),
            special_accommodations: false,
            note: String::new(),
        }
    }

    /// Override the reservation length. `load_out` stays derived from
    /// `load_in`; it is never set independently.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.load_out = self.load_in + duration;
        self
    }

    /// Move the start time, preserving the current duration
    pub fn reschedule(&mut self, load_in: DateTime<Utc>) {
        let duration = self.load_out - self.load_in;
        self.load_in = load_in;
        self.load_out = load_in + duration;
    }

    pub fn increment_guests(&mut self) {
        self.guests = self.guests.saturating_add(1);
    }

    /// Guest count never drops below one
    pub fn decrement_guests(&mut self) {
        if self.guests > 1 {
            self.guests -= 1;
        }
    }
}

/// Lifecycle status reported by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A confirmed reservation, authoritative as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub restaurant: RestaurantSnapshot,
    pub status: BookingStatus,
    pub customer: CustomerInfo,
    pub guests: u32,
    pub load_in: DateTime<Utc>,
    pub load_out: DateTime<Utc>,
    pub is_special_occasion: bool,
    #[serde(default)]
    pub event_special: String,
    pub special_accommodations: bool,
    #[serde(default)]
    pub note: String,
}

impl Booking {
    /// A booking stays "upcoming" until its start time has passed
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.load_in >= now
    }
}
