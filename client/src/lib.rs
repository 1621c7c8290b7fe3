//! Book My Seat - Client Core
//!
//! The non-UI core of the table reservation client: session/location gating
//! that drives navigation, geospatial restaurant discovery, booking
//! construction and submission, reminder scheduling, and booking
//! classification. The backend HTTP API and the OS notification service are
//! reached through the trait seams in [`external`].

pub mod config;
pub mod error;
pub mod external;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber for a host application.
///
/// Call once at startup; a second call is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bms_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
