//! Fixed-shape load grid

use serde::{Deserialize, Serialize};
use trailer_types::{LoadError, RangeBound, Zone, LENGTH_ZONES, WIDTH_ZONES, ZONE_COUNT};

use super::TrailerDimensions;

/// Stacked cargo height per zone, `[length position][width position]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadGrid {
    heights: [[f64; WIDTH_ZONES]; LENGTH_ZONES],
}

impl LoadGrid {
    pub const fn new(heights: [[f64; WIDTH_ZONES]; LENGTH_ZONES]) -> Self {
        Self { heights }
    }

    /// Grid with every zone empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Grid with every zone at the same height
    pub fn filled(height: f64) -> Self {
        Self::new([[height; WIDTH_ZONES]; LENGTH_ZONES])
    }

    /// Build a grid from dynamically shaped rows.
    ///
    /// Fails with `LoadError::Shape` unless there are exactly 3 rows of 2.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, LoadError> {
        let well_formed =
            rows.len() == LENGTH_ZONES && rows.iter().all(|row| row.len() == WIDTH_ZONES);
        if !well_formed {
            return Err(LoadError::Shape {
                found: describe_shape(rows),
            });
        }

        let mut grid = Self::empty();
        for zone in Zone::all() {
            grid.set(zone, rows[zone.row][zone.col]);
        }
        Ok(grid)
    }

    /// Build a grid from six heights in row-major order
    pub fn from_flat(values: &[f64]) -> Result<Self, LoadError> {
        if values.len() != ZONE_COUNT {
            return Err(LoadError::Shape {
                found: format!("{} values", values.len()),
            });
        }

        let mut grid = Self::empty();
        for (zone, &value) in Zone::all().zip(values) {
            grid.set(zone, value);
        }
        Ok(grid)
    }

    pub fn get(&self, zone: Zone) -> f64 {
        self.heights[zone.row][zone.col]
    }

    pub fn set(&mut self, zone: Zone, height: f64) {
        self.heights[zone.row][zone.col] = height;
    }

    pub fn rows(&self) -> &[[f64; WIDTH_ZONES]; LENGTH_ZONES] {
        &self.heights
    }

    /// Zones and their heights in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Zone, f64)> + '_ {
        Zone::all().map(move |zone| (zone, self.get(zone)))
    }

    /// Check every zone against `[0, dims.height]`, reporting the first offender
    pub fn validate(&self, dims: &TrailerDimensions) -> Result<(), LoadError> {
        for (zone, height) in self.iter() {
            check_height(zone, height, dims.height)?;
        }
        Ok(())
    }
}

/// Range-check one zone height against `[0, max]`
pub fn check_height(zone: Zone, value: f64, max: f64) -> Result<f64, LoadError> {
    if value.is_nan() {
        return Err(LoadError::Parse {
            zone,
            input: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(LoadError::Range {
            zone,
            value,
            bound: RangeBound::Minimum,
        });
    }
    if value > max {
        return Err(LoadError::Range {
            zone,
            value,
            bound: RangeBound::Maximum(max),
        });
    }
    Ok(value)
}

fn describe_shape(rows: &[Vec<f64>]) -> String {
    let lengths: Vec<usize> = rows.iter().map(Vec::len).collect();
    match lengths.first() {
        None => "0x0".to_string(),
        Some(&cols) if lengths.iter().all(|&len| len == cols) => {
            format!("{}x{}", rows.len(), cols)
        }
        Some(_) => format!("ragged rows of lengths {:?}", lengths),
    }
}
