//! Derived load summary

use serde::{Deserialize, Serialize};
use trailer_types::ZONE_COUNT;

/// Fill percentage and number of occupied zones for one grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Mean normalized zone height, as a percentage
    pub percentage_fill: f64,
    /// Zones with a non-zero height
    pub loaded_zone_count: usize,
}

impl LoadSummary {
    pub fn percentage_line(&self) -> String {
        format!("Total cargo load: {:.2} %", self.percentage_fill)
    }

    pub fn zones_line(&self) -> String {
        format!("Loaded zones: {}/{}", self.loaded_zone_count, ZONE_COUNT)
    }
}

impl std::fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.percentage_line())?;
        write!(f, "{}", self.zones_line())
    }
}
