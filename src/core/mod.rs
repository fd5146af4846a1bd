// Core algorithm exports
pub mod distance;
pub mod engine;
pub mod filters;

pub use distance::{distance_between, distance_miles};
pub use engine::{FilterEngine, FilterResult};
pub use filters::{
    filter_by_amenity, filter_by_description, filter_by_distance, filter_by_lighting,
    filter_by_number,
};
