//! Configuration management for the Book My Seat client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with BMS_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Backend API configuration
    pub api: ApiConfig,

    /// Restaurant search configuration
    pub search: SearchConfig,

    /// Booking defaults
    pub booking: BookingConfig,

    /// Reminder scheduling configuration
    pub reminder: ReminderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the reservation backend
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Radius applied when the user has not chosen one. The backend's radius
    /// parameter is kilometers; so is every radius in this crate.
    pub default_radius_km: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    /// Reservation length used when the user does not pick an end time
    pub duration_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReminderConfig {
    /// How many minutes before the reservation the notification fires
    pub lead_minutes: i64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var("BMS_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:3000")?
            .set_default("api.timeout_secs", 5)?
            .set_default("search.default_radius_km", 10.0)?
            .set_default("booking.duration_hours", 2)?
            .set_default("reminder.lead_minutes", 60)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (BMS_ prefix)
            .add_source(
                Environment::with_prefix("BMS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 5,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_km: 10.0,
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self { duration_hours: 2 }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self { lead_minutes: 60 }
    }
}
