//! Geospatial restaurant ranking
//!
//! Distances are great-circle (haversine) over the mean earth radius, and
//! stay unrounded until presentation so sub-kilometer ordering survives
//! filtering and sorting. All radii in this crate are kilometers.

use shared::models::RestaurantSummary;
use shared::types::Coordinate;

/// Mean earth radius in kilometers (IUGG)
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two coordinates in kilometers
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_long = (b.long - a.long).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_long / 2.0).sin().powi(2);

    2.0 * MEAN_EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Filter candidates to the radius and rank them nearest-first.
///
/// Inputs are never mutated; the computed distance is attached to the
/// returned records. Ties are broken by id ascending so the order is
/// reproducible. A radius of zero or less yields an empty result.
pub fn rank(
    origin: Coordinate,
    radius_km: f64,
    candidates: &[RestaurantSummary],
) -> Vec<RestaurantSummary> {
    if radius_km <= 0.0 {
        return Vec::new();
    }

    let mut ranked: Vec<(f64, RestaurantSummary)> = candidates
        .iter()
        .map(|candidate| (haversine_km(origin, candidate.coordinate), candidate))
        .filter(|(distance, _)| *distance <= radius_km)
        .map(|(distance, candidate)| (distance, candidate.clone()))
        .collect();

    ranked.sort_by(|(da, a), (db, b)| da.total_cmp(db).then_with(|| a.id.cmp(&b.id)));

    ranked
        .into_iter()
        .map(|(distance, mut candidate)| {
            candidate.distance_km = Some(distance);
            candidate
        })
        .collect()
}

/// Case-insensitive title search. A query that trims to empty returns the
/// list unchanged, not an empty result.
pub fn filter_by_title(query: &str, list: &[RestaurantSummary]) -> Vec<RestaurantSummary> {
    let query = query.trim();
    if query.is_empty() {
        return list.to_vec();
    }

    let needle = query.to_lowercase();
    list.iter()
        .filter(|restaurant| restaurant.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
