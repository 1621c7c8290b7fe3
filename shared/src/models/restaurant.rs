//! Restaurant models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Coordinate;

/// A restaurant as returned by the discovery endpoint
///
/// `distance_km` is derived client-side by the geo ranker; the server never
/// supplies it and its sort order is never trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub id: Uuid,
    pub title: String,
    pub coordinate: Coordinate,
    pub address: String,
    /// Price tier from 1 (cheapest) to 5
    pub price_tier: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    #[serde(
        rename = "distanceFromOrigin",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub distance_km: Option<f64>,
}

/// The slice of restaurant data embedded in a booking so lists render
/// without a second fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSnapshot {
    pub id: Uuid,
    pub title: String,
    pub address: String,
}

impl From<&RestaurantSummary> for RestaurantSnapshot {
    fn from(summary: &RestaurantSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title.clone(),
            address: summary.address.clone(),
        }
    }
}
