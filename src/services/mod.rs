// Service exports
pub mod dataset;

pub use dataset::{parse_properties, read_properties, LoadError};
