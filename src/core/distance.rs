use crate::models::Coordinates;

/// Nautical miles per degree of arc
const NAUTICAL_MILES_PER_DEGREE: f64 = 60.0;

/// Statute miles per nautical mile (approximate)
const STATUTE_MILES_PER_NAUTICAL_MILE: f64 = 1.1515;

/// Calculate the great-circle distance between two points in miles
///
/// Uses the spherical law of cosines. The `acos` argument is clamped to
/// `[-1, 1]` so rounding cannot push it out of domain, and coincident
/// points return exactly `0.0`.
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in statute miles. NaN inputs yield NaN.
#[inline]
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let theta_rad = (lon1 - lon2).to_radians();

    let cosine = lat1_rad.sin() * lat2_rad.sin()
        + lat1_rad.cos() * lat2_rad.cos() * theta_rad.cos();
    let arc_degrees = cosine.clamp(-1.0, 1.0).acos().to_degrees();

    arc_degrees * NAUTICAL_MILES_PER_DEGREE * STATUTE_MILES_PER_NAUTICAL_MILE
}

/// Distance in miles between two coordinate pairs
#[inline]
pub fn distance_between(from: Coordinates, to: Coordinates) -> f64 {
    distance_miles(from.latitude, from.longitude, to.latitude, to.longitude)
}
