use crate::models::{Coordinates, Property};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a field, operator or lighting name cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseSelectorError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseSelectorError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Numeric property field a comparison filter can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    SquareFootage,
    Price,
    Rooms,
    Bathrooms,
}

impl NumericField {
    /// Project the field of a property to a float
    #[inline]
    pub fn value_of(self, property: &Property) -> f64 {
        match self {
            NumericField::SquareFootage => property.square_footage as f64,
            NumericField::Price => property.price,
            NumericField::Rooms => property.rooms as f64,
            NumericField::Bathrooms => property.bathrooms as f64,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NumericField::SquareFootage => "squareFootage",
            NumericField::Price => "price",
            NumericField::Rooms => "rooms",
            NumericField::Bathrooms => "bathrooms",
        }
    }
}

impl FromStr for NumericField {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "squareFootage" => Ok(NumericField::SquareFootage),
            "price" => Ok(NumericField::Price),
            "rooms" => Ok(NumericField::Rooms),
            "bathrooms" => Ok(NumericField::Bathrooms),
            other => Err(ParseSelectorError::new("field", other)),
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator for numeric filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    GreaterThan,
    LessThan,
    Equal,
}

impl Comparison {
    /// Menu order used by the prompt layer
    pub const ALL: [Comparison; 3] = [
        Comparison::GreaterThan,
        Comparison::LessThan,
        Comparison::Equal,
    ];

    /// Evaluate `lhs <op> rhs`
    ///
    /// Equality is exact IEEE comparison, so prices that differ only by
    /// rounding noise do not compare equal.
    #[inline]
    pub fn holds(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparison::GreaterThan => lhs > rhs,
            Comparison::LessThan => lhs < rhs,
            Comparison::Equal => lhs == rhs,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Comparison::GreaterThan => "greaterThan",
            Comparison::LessThan => "lessThan",
            Comparison::Equal => "equal",
        }
    }
}

impl FromStr for Comparison {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greaterThan" => Ok(Comparison::GreaterThan),
            "lessThan" => Ok(Comparison::LessThan),
            "equal" => Ok(Comparison::Equal),
            other => Err(ParseSelectorError::new("operator", other)),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lighting level a property can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lighting {
    Low,
    Medium,
    High,
}

impl Lighting {
    pub const ALL: [Lighting; 3] = [Lighting::Low, Lighting::Medium, Lighting::High];

    /// Canonical dataset spelling
    pub fn as_str(self) -> &'static str {
        match self {
            Lighting::Low => "low",
            Lighting::Medium => "medium",
            Lighting::High => "high",
        }
    }
}

impl FromStr for Lighting {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Lighting::Low),
            "medium" => Ok(Lighting::Medium),
            "high" => Ok(Lighting::High),
            other => Err(ParseSelectorError::new("lighting level", other)),
        }
    }
}

impl fmt::Display for Lighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully specified filter invocation
#[derive(Debug, Clone, PartialEq)]
pub enum FilterRequest {
    Numeric {
        field: NumericField,
        comparison: Comparison,
        value: f64,
    },
    Amenity(String),
    Description(String),
    Lighting(Lighting),
    Distance {
        origin: Coordinates,
        max_miles: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_resolve_from_names() {
        assert_eq!("price".parse::<NumericField>(), Ok(NumericField::Price));
        assert_eq!(
            "squareFootage".parse::<NumericField>(),
            Ok(NumericField::SquareFootage)
        );
        assert_eq!("lessThan".parse::<Comparison>(), Ok(Comparison::LessThan));
        assert_eq!("medium".parse::<Lighting>(), Ok(Lighting::Medium));
    }

    #[test]
    fn test_unknown_selector_rejected() {
        let err = "acreage".parse::<NumericField>().unwrap_err();
        assert_eq!(err.to_string(), "unknown field: acreage");

        assert!("notEqual".parse::<Comparison>().is_err());
        // Lighting names are case-sensitive
        assert!("High".parse::<Lighting>().is_err());
    }

    #[test]
    fn test_comparison_semantics() {
        assert!(Comparison::GreaterThan.holds(2.0, 1.0));
        assert!(!Comparison::GreaterThan.holds(1.0, 1.0));
        assert!(Comparison::LessThan.holds(1.0, 2.0));
        assert!(!Comparison::LessThan.holds(2.0, 2.0));
        assert!(Comparison::Equal.holds(250000.0, 250000.0));
        // Exact equality: no epsilon tolerance
        assert!(!Comparison::Equal.holds(0.1 + 0.2, 0.3));
    }
}
