//! Error types for trailer-load

use thiserror::Error;

use crate::Zone;

/// Which side of the allowed height range a value fell on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeBound {
    /// Below zero
    Minimum,
    /// Above the trailer's interior height
    Maximum(f64),
}

impl std::fmt::Display for RangeBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeBound::Minimum => write!(f, "must not be negative"),
            RangeBound::Maximum(max) => write!(f, "exceeds the maximum height of {:.2}", max),
        }
    }
}

/// Load grid errors: shape, parsing, and range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("Input grid must be 3x2 (LENGTH x WIDTH), got {found}")]
    Shape { found: String },

    #[error("Invalid number in {zone}: '{input}'")]
    Parse { zone: Zone, input: String },

    #[error("Height {value} in {zone} {bound}")]
    Range {
        zone: Zone,
        value: f64,
        bound: RangeBound,
    },
}

impl LoadError {
    /// Zone the error refers to, if any
    pub fn zone(&self) -> Option<Zone> {
        match self {
            LoadError::Shape { .. } => None,
            LoadError::Parse { zone, .. } | LoadError::Range { zone, .. } => Some(*zone),
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Viewer error: {0}")]
    Viewer(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_message_names_zone_and_bound() {
        let err = LoadError::Range {
            zone: Zone::new(0, 1),
            value: 3.0,
            bound: RangeBound::Maximum(2.7),
        };
        assert_eq!(
            err.to_string(),
            "Height 3 in row 1, column 2 exceeds the maximum height of 2.70"
        );
        assert_eq!(err.zone(), Some(Zone::new(0, 1)));
    }

    #[test]
    fn test_parse_error_message() {
        let err = LoadError::Parse {
            zone: Zone::new(1, 0),
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid number in row 2, column 1: 'abc'");
    }

    #[test]
    fn test_load_error_wraps_transparently() {
        let err: Error = LoadError::Shape {
            found: "2x2".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Input grid must be 3x2 (LENGTH x WIDTH), got 2x2");
    }
}
