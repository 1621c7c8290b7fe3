//! Reminder scheduling
//!
//! One reminder per booking, toggled on and off. The bookkeeping lives
//! behind a swappable store so a host app may persist it without changing
//! the scheduler's contract; the default store is the same transient map
//! the rest of the app state uses. The scheduler owns no background loop;
//! the app drives `sweep` at its refresh points.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::error::AppResult;
use crate::external::notifications::{NotificationGateway, NotificationPayload};
use shared::models::{Booking, Reminder};

/// Bookkeeping for live reminders, keyed by booking id
pub trait ReminderStore: Send + Sync {
    fn get(&self, booking_id: Uuid) -> Option<Reminder>;
    fn insert(&self, reminder: Reminder);
    fn remove(&self, booking_id: Uuid) -> Option<Reminder>;
    fn all(&self) -> Vec<Reminder>;
    /// Drop every entry without touching the OS side
    fn clear(&self);
}

/// In-memory store, lost on restart like the rest of the client state
#[derive(Debug, Default)]
pub struct InMemoryReminderStore {
    inner: Mutex<HashMap<Uuid, Reminder>>,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReminderStore for InMemoryReminderStore {
    fn get(&self, booking_id: Uuid) -> Option<Reminder> {
        self.inner
            .lock()
            .expect("reminder store lock poisoned")
            .get(&booking_id)
            .cloned()
    }

    fn insert(&self, reminder: Reminder) {
        self.inner
            .lock()
            .expect("reminder store lock poisoned")
            .insert(reminder.booking_id, reminder);
    }

    fn remove(&self, booking_id: Uuid) -> Option<Reminder> {
        self.inner
            .lock()
            .expect("reminder store lock poisoned")
            .remove(&booking_id)
    }

    fn all(&self) -> Vec<Reminder> {
        self.inner
            .lock()
            .expect("reminder store lock poisoned")
            .values()
            .cloned()
            .collect()
    }

    fn clear(&self) {
        self.inner
            .lock()
            .expect("reminder store lock poisoned")
            .clear();
    }
}

/// Non-fatal conditions the caller may surface to the user
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulingWarning {
    /// The booking starts in under the lead time, so the notification fires
    /// immediately rather than ahead of the reservation
    FiresImmediately { fire_at: DateTime<Utc> },
    /// The OS refused to cancel; the reservation itself is unaffected
    CancelFailed { booking_id: Uuid, message: String },
}

/// Result of a reminder toggle
#[derive(Debug)]
pub struct ToggleOutcome {
    /// The live reminder after the toggle; `None` means the user opted out
    pub reminder: Option<Reminder>,
    pub warning: Option<SchedulingWarning>,
}

/// Maps bookings to scheduled local notifications
pub struct ReminderScheduler<G: NotificationGateway, S: ReminderStore> {
    gateway: G,
    store: S,
    lead: Duration,
}

impl<G: NotificationGateway, S: ReminderStore> ReminderScheduler<G, S> {
    pub fn new(gateway: G, store: S) -> Self {
        Self {
            gateway,
            store,
            lead: Reminder::default_lead(),
        }
    }

    /// Override the lead time (minutes before the reservation start)
    pub fn with_lead_minutes(mut self, minutes: i64) -> Self {
        self.lead = Duration::minutes(minutes);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Schedule a reminder for the booking, or cancel the live one.
    ///
    /// Toggling twice restores the initial state; there is never more than
    /// one live reminder per booking. A booking that starts in under the
    /// lead time is still scheduled (it fires immediately) and reported via
    /// a warning, not an error.
    pub async fn toggle(&self, booking: &Booking, now: DateTime<Utc>) -> AppResult<ToggleOutcome> {
        if let Some(current) = self.store.get(booking.id) {
            return match self.gateway.cancel(&current.notification_id).await {
                Ok(()) => {
                    self.store.remove(booking.id);
                    tracing::debug!(booking_id = %booking.id, "reminder cancelled");
                    Ok(ToggleOutcome {
                        reminder: None,
                        warning: None,
                    })
                }
                Err(error) => {
                    // The user opted out: drop the bookkeeping even though
                    // the OS kept the notification.
                    self.store.remove(booking.id);
                    tracing::warn!(booking_id = %booking.id, %error, "reminder cancellation failed");
                    Ok(ToggleOutcome {
                        reminder: None,
                        warning: Some(SchedulingWarning::CancelFailed {
                            booking_id: booking.id,
                            message: error.to_string(),
                        }),
                    })
                }
            };
        }

        let fire_at = Reminder::fire_at_for(booking, self.lead);
        let warning = if fire_at <= now {
            tracing::info!(booking_id = %booking.id, %fire_at, "reminder fire time already passed, will fire immediately");
            Some(SchedulingWarning::FiresImmediately { fire_at })
        } else {
            None
        };

        let payload = NotificationPayload::for_booking(booking);
        let notification_id = self.gateway.schedule_at(fire_at, payload).await?;

        let reminder = Reminder::new(booking.id, notification_id, fire_at);
        self.store.insert(reminder.clone());
        tracing::debug!(booking_id = %booking.id, %fire_at, "reminder scheduled");

        Ok(ToggleOutcome {
            reminder: Some(reminder),
            warning,
        })
    }

    /// Cancel reminders whose booking left the upcoming set (time passed,
    /// cancelled, or gone from the backend's list). Invoked by the app at
    /// refresh points. Cancellation failures never block; they come back as
    /// warnings.
    pub async fn sweep(
        &self,
        bookings: &[Booking],
        now: DateTime<Utc>,
    ) -> Vec<SchedulingWarning> {
        let mut warnings = Vec::new();

        for reminder in self.store.all() {
            let still_upcoming = bookings
                .iter()
                .find(|b| b.id == reminder.booking_id)
                .is_some_and(|b| b.is_upcoming(now));
            if still_upcoming {
                continue;
            }

            self.store.remove(reminder.booking_id);
            if let Err(error) = self.gateway.cancel(&reminder.notification_id).await {
                tracing::warn!(booking_id = %reminder.booking_id, %error, "stale reminder cancellation failed");
                warnings.push(SchedulingWarning::CancelFailed {
                    booking_id: reminder.booking_id,
                    message: error.to_string(),
                });
            } else {
                tracing::debug!(booking_id = %reminder.booking_id, "stale reminder cancelled");
            }
        }

        warnings
    }

    /// Drop all reminder bookkeeping without cancelling OS-side, for the
    /// logout path
    pub fn discard_all(&self) {
        self.store.clear();
    }
}
