//! Booking classification
//!
//! The single definition of "upcoming vs past" in the client. The backend
//! pre-partitions its bookings response, but freshly created bookings and a
//! drifted device clock both need the split re-derived locally, so every
//! screen goes through this module. Sorting is a separate, explicit step;
//! `partition` itself is stable and imposes no order of its own.

use chrono::{DateTime, Utc};

use crate::external::api::BookingsResponse;
use shared::models::Booking;

/// Bookings split by whether their start time is still ahead
#[derive(Debug, Clone, Default)]
pub struct BookingPartition {
    pub upcoming: Vec<Booking>,
    pub past: Vec<Booking>,
}

/// Stable partition: a booking is upcoming iff `load_in >= now`
pub fn partition(bookings: &[Booking], now: DateTime<Utc>) -> BookingPartition {
    let mut result = BookingPartition::default();

    for booking in bookings {
        if booking.is_upcoming(now) {
            result.upcoming.push(booking.clone());
        } else {
            result.past.push(booking.clone());
        }
    }

    result
}

/// Re-derive the split for a backend response. The backend partitions by
/// its own clock, so a response fetched earlier (or a freshly created
/// booking appended to `bookings`) can be stale against the device clock.
pub fn reclassify(response: &BookingsResponse, now: DateTime<Utc>) -> BookingPartition {
    let mut all = Vec::with_capacity(response.bookings.len() + response.past_bookings.len());
    all.extend(response.bookings.iter().cloned());
    all.extend(response.past_bookings.iter().cloned());
    partition(&all, now)
}

/// Soonest-first, the order upcoming lists are shown in
pub fn sort_ascending_by_load_in(bookings: &mut [Booking]) {
    bookings.sort_by_key(|b| b.load_in);
}

/// Most-recent-first, the order history lists are shown in
pub fn sort_descending_by_load_in(bookings: &mut [Booking]) {
    bookings.sort_by_key(|b| std::cmp::Reverse(b.load_in));
}

/// Summary statistics over a set of bookings
#[derive(Debug, Clone, PartialEq)]
pub struct BookingStats {
    pub first_time: Option<DateTime<Utc>>,
    pub last_time: Option<DateTime<Utc>>,
    pub total_guests: u64,
}

/// Earliest and latest start times plus the guest total. An empty input
/// yields empty bounds and zero guests, never an error.
pub fn summarize(bookings: &[Booking]) -> BookingStats {
    BookingStats {
        first_time: bookings.iter().map(|b| b.load_in).min(),
        last_time: bookings.iter().map(|b| b.load_in).max(),
        total_guests: bookings.iter().map(|b| u64::from(b.guests)).sum(),
    }
}
