//! Trailer dimensions

use serde::{Deserialize, Serialize};
use trailer_types::{LENGTH_ZONES, WIDTH_ZONES};

use crate::constants::{HEIGHT, LENGTH, WIDTH};

/// Interior dimensions of a cargo hold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailerDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl TrailerDimensions {
    /// The standard semi-trailer this tool models
    pub const STANDARD: TrailerDimensions = TrailerDimensions {
        length: LENGTH,
        width: WIDTH,
        height: HEIGHT,
    };

    /// Length of one zone along the length axis
    pub fn zone_length(&self) -> f64 {
        self.length / LENGTH_ZONES as f64
    }

    /// Width of one zone across the width axis
    pub fn zone_width(&self) -> f64 {
        self.width / WIDTH_ZONES as f64
    }
}

impl Default for TrailerDimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_partition() {
        let dims = TrailerDimensions::STANDARD;
        assert!((dims.zone_length() * 3.0 - 13.625).abs() < 1e-9);
        assert!((dims.zone_width() - 1.24).abs() < 1e-9);
    }
}
