use crate::models::Property;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the property dataset
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error opening {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error decoding {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read the property list from a JSON file
///
/// The file holds a single JSON array of property records.
pub fn read_properties<P: AsRef<Path>>(path: P) -> Result<Vec<Property>, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let properties: Vec<Property> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Loaded {} properties from {}", properties.len(), path.display());

    Ok(properties)
}

/// Decode a property list from an in-memory JSON document
pub fn parse_properties(json: &str) -> Result<Vec<Property>, serde_json::Error> {
    serde_json::from_str(json)
}
