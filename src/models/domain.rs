use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single real-estate listing as decoded from the dataset
///
/// Missing keys decode to zero values and counts may be negative; the
/// loader accepts whatever the dataset holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    #[serde(rename = "squareFootage")]
    pub square_footage: i64,
    pub lighting: String,
    pub price: f64,
    pub rooms: i64,
    pub bathrooms: i64,
    pub location: Coordinates,
    pub description: String,
    // The dataset has always spelled this key with a double "m"
    #[serde(rename = "ammenities", alias = "amenities")]
    pub amenities: BTreeMap<String, bool>,
}

impl Property {
    /// Whether the amenity is present and flagged true
    pub fn has_amenity(&self, name: &str) -> bool {
        self.amenities.get(name).copied().unwrap_or(false)
    }

    /// Names of the amenities flagged true, in ascending order
    pub fn present_amenities(&self) -> impl Iterator<Item = &str> {
        self.amenities
            .iter()
            .filter(|(_, present)| **present)
            .map(|(name, _)| name.as_str())
    }
}

/// Latitude/longitude pair in decimal degrees
///
/// Encoded on the wire as a two-element array `[lat, lon]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.latitude, c.longitude]
    }
}
