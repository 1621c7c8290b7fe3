//! Validation utilities for the Book My Seat client
//!
//! Field-level checks shared by the booking builder and any host form code.
//! Each helper reports a single failure; the booking builder collects them
//! into a `ValidationError` list so every problem surfaces at once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A caller-correctable input problem, surfaced inline and never sent over
/// the network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Serde name of the offending field, e.g. `loadIn` or `customer.email`
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Booking Validations
// ============================================================================

/// Validate the party size (at least one guest)
pub fn validate_guest_count(guests: u32) -> Result<(), &'static str> {
    if guests < 1 {
        return Err("At least one guest is required");
    }
    Ok(())
}

/// Validate that a reservation starts strictly in the future
pub fn validate_load_in(load_in: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), &'static str> {
    if load_in <= now {
        return Err("Reservation time must be in the future");
    }
    Ok(())
}

/// Validate the reservation window (`load_out` is derived, but must stay
/// after `load_in` when a caller overrides the duration)
pub fn validate_booking_window(
    load_in: DateTime<Utc>,
    load_out: DateTime<Utc>,
) -> Result<(), &'static str> {
    if load_out <= load_in {
        return Err("Reservation must end after it starts");
    }
    Ok(())
}

/// A special occasion needs a name; a regular booking must not carry one
pub fn validate_special_occasion(
    is_special_occasion: bool,
    event_special: &str,
) -> Result<(), &'static str> {
    if is_special_occasion && event_special.trim().is_empty() {
        return Err("Name the occasion or turn the special-occasion toggle off");
    }
    Ok(())
}

/// Validate price tier is in the supported 1..5 range
pub fn validate_price_tier(tier: u8) -> Result<(), &'static str> {
    if !(1..=5).contains(&tier) {
        return Err("Price tier must be between 1 and 5");
    }
    Ok(())
}

// ============================================================================
// Contact Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate a phone number: 7-15 digits once separators are stripped
/// Accepts: 4165550188, 416-555-0188, +1 416 555 0188
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 7 {
        return Err("Phone number is too short");
    }
    if digits.len() > 15 {
        return Err("Phone number is too long");
    }
    Ok(())
}

/// Validate a required free-text field is non-blank
pub fn validate_non_empty(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("This field is required");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    // ========================================================================
    // Booking Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_guest_count() {
        assert!(validate_guest_count(1).is_ok());
        assert!(validate_guest_count(12).is_ok());
        assert!(validate_guest_count(0).is_err());
    }

    #[test]
    fn test_validate_load_in_future() {
        assert!(validate_load_in(now() + Duration::hours(1), now()).is_ok());
    }

    #[test]
    fn test_validate_load_in_past_or_now() {
        assert!(validate_load_in(now() - Duration::hours(1), now()).is_err());
        assert!(validate_load_in(now(), now()).is_err());
    }

    #[test]
    fn test_validate_booking_window() {
        let load_in = now() + Duration::hours(2);
        assert!(validate_booking_window(load_in, load_in + Duration::hours(2)).is_ok());
        assert!(validate_booking_window(load_in, load_in).is_err());
        assert!(validate_booking_window(load_in, load_in - Duration::minutes(30)).is_err());
    }

    #[test]
    fn test_validate_special_occasion() {
        assert!(validate_special_occasion(false, "").is_ok());
        assert!(validate_special_occasion(true, "Anniversary").is_ok());
        assert!(validate_special_occasion(true, "").is_err());
        assert!(validate_special_occasion(true, "   ").is_err());
    }

    #[test]
    fn test_validate_price_tier() {
        assert!(validate_price_tier(1).is_ok());
        assert!(validate_price_tier(5).is_ok());
        assert!(validate_price_tier(0).is_err());
        assert!(validate_price_tier(6).is_err());
    }

    // ========================================================================
    // Contact Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
        assert!(validate_email("@.").is_err());
    }

    #[test]
    fn test_validate_phone_valid() {
        assert!(validate_phone("4165550188").is_ok());
        assert!(validate_phone("416-555-0188").is_ok());
        assert!(validate_phone("+1 416 555 0188").is_ok());
    }

    #[test]
    fn test_validate_phone_invalid() {
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("1234567890123456").is_err());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("Jordan").is_ok());
        assert!(validate_non_empty("").is_err());
        assert!(validate_non_empty("   ").is_err());
    }

    // ========================================================================
    // Property-Based Tests
    // ========================================================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            /// Any guest count of at least one passes
            #[test]
            fn prop_positive_guest_counts_pass(guests in 1u32..10_000) {
                prop_assert!(validate_guest_count(guests).is_ok());
            }

            /// The phone rule depends only on the digit count
            #[test]
            fn prop_phone_digit_count_rule(digits in proptest::collection::vec(0u8..10, 0..20)) {
                let phone: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
                let result = validate_phone(&phone);
                if (7..=15).contains(&digits.len()) {
                    prop_assert!(result.is_ok());
                } else {
                    prop_assert!(result.is_err());
                }
            }

            /// Separators never change a phone number's validity
            #[test]
            fn prop_phone_ignores_separators(digits in proptest::collection::vec(0u8..10, 7..=15)) {
                let plain: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
                let dashed: String = digits
                    .iter()
                    .map(|d| format!("{}-", d))
                    .collect();
                prop_assert!(validate_phone(&plain).is_ok());
                prop_assert!(validate_phone(&dashed).is_ok());
            }

            /// A future start always passes; a past or present one never does
            #[test]
            fn prop_load_in_strictly_future(offset_secs in -200_000i64..200_000) {
                let load_in = now() + Duration::seconds(offset_secs);
                let result = validate_load_in(load_in, now());
                if offset_secs > 0 {
                    prop_assert!(result.is_ok());
                } else {
                    prop_assert!(result.is_err());
                }
            }
        }
    }
}
