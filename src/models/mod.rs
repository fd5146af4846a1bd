// Model exports
pub mod domain;
pub mod requests;

pub use domain::{Coordinates, Property};
pub use requests::{Comparison, FilterRequest, Lighting, NumericField, ParseSelectorError};
