use crate::core::distance::distance_between;
use crate::models::{Comparison, Coordinates, Lighting, NumericField, Property};

/// Check if a property's numeric field satisfies `field <op> threshold`
#[inline]
pub fn matches_number(
    property: &Property,
    field: NumericField,
    comparison: Comparison,
    threshold: f64,
) -> bool {
    comparison.holds(field.value_of(property), threshold)
}

/// Check if a property has the amenity flagged true
///
/// A missing key counts as absent, never as an error.
#[inline]
pub fn matches_amenity(property: &Property, amenity: &str) -> bool {
    property.has_amenity(amenity)
}

/// Check if the description contains the keyword, ignoring case
///
/// An empty keyword matches every description.
#[inline]
pub fn matches_description(property: &Property, keyword: &str) -> bool {
    contains_lowercase(&property.description, &keyword.to_lowercase())
}

/// Case-insensitive substring test against an already lowercased needle
#[inline]
fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Check if the lighting field equals the level exactly
#[inline]
pub fn matches_lighting(property: &Property, lighting: Lighting) -> bool {
    property.lighting == lighting.as_str()
}

/// Check if a property lies within `max_miles` of the origin (inclusive)
#[inline]
pub fn is_within_distance(property: &Property, origin: Coordinates, max_miles: f64) -> bool {
    distance_between(origin, property.location) <= max_miles
}

/// Keep the properties whose numeric field compares true against the threshold
pub fn filter_by_number<'a>(
    properties: &'a [Property],
    field: NumericField,
    comparison: Comparison,
    threshold: f64,
) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|p| matches_number(p, field, comparison, threshold))
        .collect()
}

/// Keep the properties that have the amenity
pub fn filter_by_amenity<'a>(properties: &'a [Property], amenity: &str) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|p| matches_amenity(p, amenity))
        .collect()
}

/// Keep the properties whose description mentions the keyword
pub fn filter_by_description<'a>(properties: &'a [Property], keyword: &str) -> Vec<&'a Property> {
    let needle = keyword.to_lowercase();
    properties
        .iter()
        .filter(|p| contains_lowercase(&p.description, &needle))
        .collect()
}

/// Keep the properties with the given lighting level
pub fn filter_by_lighting(properties: &[Property], lighting: Lighting) -> Vec<&Property> {
    properties
        .iter()
        .filter(|p| matches_lighting(p, lighting))
        .collect()
}

/// Keep the properties within `max_miles` of the origin
pub fn filter_by_distance(
    properties: &[Property],
    origin: Coordinates,
    max_miles: f64,
) -> Vec<&Property> {
    properties
        .iter()
        .filter(|p| is_within_distance(p, origin, max_miles))
        .collect()
}
