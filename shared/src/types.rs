//! Common value types used across the client

use serde::{Deserialize, Serialize};

/// A GPS coordinate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub long: f64,
}

impl Coordinate {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

/// A coordinate paired with the human-readable place name the user picked
/// when setting their home location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedLocation {
    pub coordinate: Coordinate,
    pub name: String,
}

impl NamedLocation {
    pub fn new(coordinate: Coordinate, name: impl Into<String>) -> Self {
        Self {
            coordinate,
            name: name.into(),
        }
    }
}
