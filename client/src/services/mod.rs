//! Core services for the Book My Seat client

pub mod booking;
pub mod bookings;
pub mod geo;
pub mod reminder;
pub mod session;

pub use booking::BookingService;
pub use bookings::{partition, reclassify, summarize, BookingPartition, BookingStats};
pub use reminder::{InMemoryReminderStore, ReminderScheduler, ReminderStore};
pub use session::{resolve_route, RouteTarget, SessionGate};
