//! HTTP client for the reservation backend
//!
//! The backend owns authentication, persistence, and table availability; the
//! client talks to three endpoints and treats their responses as
//! authoritative. Transport failures map to `AppError::Network` (retryable),
//! structured refusals to `AppError::Rejected` with the server's message
//! kept verbatim.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use shared::models::{Booking, BookingDraft, RestaurantSummary, UserProfile};
use shared::types::Coordinate;

/// Restaurant discovery endpoint seam
#[async_trait]
pub trait RestaurantApi: Send + Sync {
    /// `GET /api/restaurants?lat&lng&radius`. The server guarantees neither
    /// distances nor sort order; the geo ranker derives both.
    async fn search(&self, origin: Coordinate, radius_km: f64)
        -> AppResult<Vec<RestaurantSummary>>;
}

/// Booking endpoints seam
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// `POST /api/bookings` with a bearer token
    async fn create(&self, token: &str, draft: &BookingDraft) -> AppResult<Booking>;

    /// `GET /api/bookings` with a bearer token
    async fn list(&self, token: &str) -> AppResult<BookingsResponse>;
}

/// The backend pre-partitions bookings by its own clock. The classifier can
/// reproduce or re-derive this split against the device clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub bookings: Vec<Booking>,
    pub past_bookings: Vec<Booking>,
}

/// Response from `POST /api/user/login`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserProfile,
    pub token: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Structured error body returned by the backend on refusals
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Reservation backend client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.api.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client with an explicit base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Authenticate against `POST /api/user/login`
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let url = format!("{}/api/user/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(transport_error)?;

        Self::parse_response(response).await
    }

    /// Map a non-2xx response into the error taxonomy. 5xx is transient;
    /// 4xx carries a reason the user must see verbatim.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| AppError::Network(format!("Failed to parse response: {}", e)));
        }

        let body = response.text().await.unwrap_or_default();

        if status.is_server_error() {
            return Err(AppError::Network(format!(
                "Server error: {} - {}",
                status, body
            )));
        }

        let reason = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| {
                if body.is_empty() {
                    format!("Request refused with status {}", status)
                } else {
                    body
                }
            });

        Err(AppError::Rejected(reason))
    }
}

#[async_trait]
impl RestaurantApi for ApiClient {
    async fn search(
        &self,
        origin: Coordinate,
        radius_km: f64,
    ) -> AppResult<Vec<RestaurantSummary>> {
        let url = format!(
            "{}/api/restaurants?lat={}&lng={}&radius={}",
            self.base_url, origin.lat, origin.long, radius_km
        );

        tracing::debug!(%url, "searching restaurants");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;

        Self::parse_response(response).await
    }
}

#[async_trait]
impl BookingApi for ApiClient {
    async fn create(&self, token: &str, draft: &BookingDraft) -> AppResult<Booking> {
        let url = format!("{}/api/bookings", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;

        Self::parse_response(response).await
    }

    async fn list(&self, token: &str) -> AppResult<BookingsResponse> {
        let url = format!("{}/api/bookings", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;

        Self::parse_response(response).await
    }
}

#[async_trait]
impl<A: BookingApi + ?Sized> BookingApi for std::sync::Arc<A> {
    async fn create(&self, token: &str, draft: &BookingDraft) -> AppResult<Booking> {
        (**self).create(token, draft).await
    }

    async fn list(&self, token: &str) -> AppResult<BookingsResponse> {
        (**self).list(token).await
    }
}

/// Send-level reqwest failures are always transient for our purposes
fn transport_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::Network("Request timed out".to_string())
    } else {
        AppError::Network(format!("Request failed: {}", e))
    }
}
