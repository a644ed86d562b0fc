//! Zone addressing for the fixed 3x2 load grid

use serde::{Deserialize, Serialize};

/// Number of zones along the trailer's length axis
pub const LENGTH_ZONES: usize = 3;

/// Number of zones across the trailer's width axis
pub const WIDTH_ZONES: usize = 2;

/// Total number of load zones
pub const ZONE_COUNT: usize = LENGTH_ZONES * WIDTH_ZONES;

/// One cell of the load grid.
///
/// `row` runs along the length axis (0 = front), `col` across the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Zone {
    pub row: usize,
    pub col: usize,
}

impl Zone {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All zones in row-major order (front-left first, rear-right last)
    pub fn all() -> impl Iterator<Item = Zone> {
        (0..LENGTH_ZONES).flat_map(|row| (0..WIDTH_ZONES).map(move |col| Zone::new(row, col)))
    }

    /// Position of this zone in row-major order
    pub fn index(&self) -> usize {
        self.row * WIDTH_ZONES + self.col
    }

    /// Zone at a row-major index, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ZONE_COUNT {
            Some(Zone::new(index / WIDTH_ZONES, index % WIDTH_ZONES))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, column {}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zones_row_major() {
        let zones: Vec<Zone> = Zone::all().collect();
        assert_eq!(zones.len(), ZONE_COUNT);
        assert_eq!(zones[0], Zone::new(0, 0));
        assert_eq!(zones[1], Zone::new(0, 1));
        assert_eq!(zones[5], Zone::new(2, 1));
        for (i, zone) in zones.iter().enumerate() {
            assert_eq!(zone.index(), i);
            assert_eq!(Zone::from_index(i), Some(*zone));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Zone::from_index(ZONE_COUNT), None);
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Zone::new(2, 0).to_string(), "row 3, column 1");
    }
}
