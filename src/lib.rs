//! Prop Filter - interactive filtering of real-estate property listings
//!
//! This library provides the filter engine behind the `prop-filter` CLI:
//! numeric, amenity, description, lighting and distance filters over an
//! immutable list of property records.

pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{distance::distance_miles, FilterEngine, FilterResult};
pub use crate::models::{Comparison, Coordinates, FilterRequest, Lighting, NumericField, Property};
