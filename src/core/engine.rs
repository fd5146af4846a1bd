use crate::core::filters::{
    filter_by_amenity, filter_by_description, filter_by_distance, filter_by_lighting,
    filter_by_number,
};
use crate::models::{FilterRequest, Property};

/// Result of applying one filter
#[derive(Debug)]
pub struct FilterResult<'a> {
    pub matches: Vec<&'a Property>,
    pub total_scanned: usize,
}

impl FilterResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Holds the loaded property set and dispatches filter requests over it
///
/// The set is fixed at construction and never mutated; every request scans
/// it in full and returns references in their original order.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    properties: Vec<Property>,
}

impl FilterEngine {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Apply a single filter request to the whole property set
    pub fn apply(&self, request: &FilterRequest) -> FilterResult<'_> {
        let properties = self.properties.as_slice();

        let matches = match request {
            FilterRequest::Numeric {
                field,
                comparison,
                value,
            } => filter_by_number(properties, *field, *comparison, *value),
            FilterRequest::Amenity(name) => filter_by_amenity(properties, name),
            FilterRequest::Description(keyword) => filter_by_description(properties, keyword),
            FilterRequest::Lighting(level) => filter_by_lighting(properties, *level),
            FilterRequest::Distance { origin, max_miles } => {
                filter_by_distance(properties, *origin, *max_miles)
            }
        };

        tracing::debug!(
            "Applied {:?}: {} of {} properties matched",
            request,
            matches.len(),
            properties.len()
        );

        FilterResult {
            matches,
            total_scanned: properties.len(),
        }
    }
}
