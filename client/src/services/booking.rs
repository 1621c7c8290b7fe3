//! Booking builder
//!
//! Validates a draft and submits it to the backend. Every validation
//! problem is collected before any is reported, and a draft that fails
//! validation never reaches the network. Submission does not touch the
//! session or navigate; the caller acts on the returned result.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};

use crate::error::{AppError, AppResult};
use crate::external::api::BookingApi;
use shared::models::{Booking, BookingDraft};
use shared::validation::{
    validate_booking_window, validate_email, validate_guest_count, validate_load_in,
    validate_non_empty, validate_phone, validate_special_occasion, ValidationError,
};

/// Check every rule on the draft, collecting all failures.
///
/// Field names follow the draft's wire names so the UI can attach messages
/// to inputs directly.
pub fn validate(draft: &BookingDraft, now: DateTime<Utc>) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(message) = validate_guest_count(draft.guests) {
        errors.push(ValidationError::new("guests", message));
    }
    if let Err(message) = validate_load_in(draft.load_in, now) {
        errors.push(ValidationError::new("loadIn", message));
    }
    if let Err(message) = validate_booking_window(draft.load_in, draft.load_out) {
        errors.push(ValidationError::new("loadOut", message));
    }
    if let Err(message) = validate_special_occasion(draft.is_special_occasion, &draft.event_special)
    {
        errors.push(ValidationError::new("eventSpecial", message));
    }
    if let Err(message) = validate_non_empty(&draft.customer.name) {
        errors.push(ValidationError::new("customer.name", message));
    }
    if let Err(message) = validate_non_empty(&draft.customer.phone) {
        errors.push(ValidationError::new("customer.phone", message));
    } else if let Err(message) = validate_phone(&draft.customer.phone) {
        errors.push(ValidationError::new("customer.phone", message));
    }
    if let Err(message) = validate_non_empty(&draft.customer.email) {
        errors.push(ValidationError::new("customer.email", message));
    } else if let Err(message) = validate_email(&draft.customer.email) {
        errors.push(ValidationError::new("customer.email", message));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates drafts and submits them through the booking endpoint seam
pub struct BookingService<A: BookingApi> {
    api: A,
    in_flight: AtomicBool,
}

impl<A: BookingApi> BookingService<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Validate and submit a draft.
    ///
    /// At most one submission runs at a time; a second call while one is in
    /// flight returns `AppError::SubmitInFlight` without touching the
    /// network. The draft is borrowed, never consumed, so a rejected or
    /// failed submission leaves it intact for the user to adjust.
    pub async fn submit(
        &self,
        token: &str,
        draft: &BookingDraft,
        now: DateTime<Utc>,
    ) -> AppResult<Booking> {
        if let Err(errors) = validate(draft, now) {
            return Err(AppError::Validation(errors));
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(AppError::SubmitInFlight);
        }

        let result = self.api.create(token, draft).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match &result {
            Ok(booking) => {
                tracing::info!(booking_id = %booking.id, restaurant = %booking.restaurant.title, "booking confirmed");
            }
            Err(AppError::Rejected(reason)) => {
                tracing::info!(%reason, "booking rejected by backend");
            }
            Err(error) => {
                tracing::warn!(%error, "booking submission failed");
            }
        }

        result
    }
}
