//! Load aggregation: grid heights to a fill summary

use trailer_types::{LoadError, LENGTH_ZONES, WIDTH_ZONES, ZONE_COUNT};

use crate::model::{LoadGrid, LoadSummary, TrailerDimensions};

/// Per-zone fill fractions (`height / dims.height`)
pub fn normalized(grid: &LoadGrid, dims: &TrailerDimensions) -> [[f64; WIDTH_ZONES]; LENGTH_ZONES] {
    let heights = *grid.rows();
    heights.map(|row| row.map(|height| height / dims.height))
}

/// Summarize a grid against the standard trailer
pub fn summarize(grid: &LoadGrid) -> LoadSummary {
    summarize_with(grid, &TrailerDimensions::STANDARD)
}

pub fn summarize_with(grid: &LoadGrid, dims: &TrailerDimensions) -> LoadSummary {
    let fractions = normalized(grid, dims);
    let cells = fractions.iter().flatten();

    let total: f64 = cells.clone().sum();
    let loaded_zone_count = cells.filter(|&&fraction| fraction != 0.0).count();

    LoadSummary {
        percentage_fill: total / ZONE_COUNT as f64 * 100.0,
        loaded_zone_count,
    }
}

/// Summarize dynamically shaped rows, rejecting anything but 3x2 up front
pub fn summarize_rows(rows: &[Vec<f64>]) -> Result<LoadSummary, LoadError> {
    let grid = LoadGrid::from_rows(rows)?;
    Ok(summarize(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HEIGHT;
    use trailer_types::Zone;

    fn example_grid() -> LoadGrid {
        LoadGrid::new([[0.5, 1.0], [1.5, 2.0], [0.0, 0.0]])
    }

    #[test]
    fn test_empty_grid() {
        let summary = summarize(&LoadGrid::empty());
        assert_eq!(summary.percentage_fill, 0.0);
        assert_eq!(summary.loaded_zone_count, 0);
    }

    #[test]
    fn test_full_grid() {
        let summary = summarize(&LoadGrid::filled(HEIGHT));
        assert!((summary.percentage_fill - 100.0).abs() < 1e-9);
        assert_eq!(summary.loaded_zone_count, 6);
        assert_eq!(summary.percentage_line(), "Total cargo load: 100.00 %");
    }

    #[test]
    fn test_example_grid() {
        let summary = summarize(&example_grid());
        assert!((summary.percentage_fill - 30.864).abs() < 0.001);
        assert_eq!(summary.loaded_zone_count, 4);
        assert_eq!(summary.percentage_line(), "Total cargo load: 30.86 %");
        assert_eq!(summary.zones_line(), "Loaded zones: 4/6");
    }

    #[test]
    fn test_normalized_fractions() {
        let fractions = normalized(&example_grid(), &TrailerDimensions::STANDARD);
        assert!((fractions[1][1] - 2.0 / 2.7).abs() < 1e-12);
        assert_eq!(fractions[2], [0.0, 0.0]);
    }

    #[test]
    fn test_raising_one_zone_never_lowers_fill() {
        for zone in Zone::all() {
            let mut grid = example_grid();
            grid.set(zone, 0.0);
            let mut previous = summarize(&grid);
            for step in 1..=10 {
                grid.set(zone, HEIGHT * step as f64 / 10.0);
                let current = summarize(&grid);
                assert!(current.percentage_fill >= previous.percentage_fill);
                assert!(current.loaded_zone_count >= previous.loaded_zone_count);
                previous = current;
            }
        }
    }

    #[test]
    fn test_loading_empty_zone_never_lowers_count() {
        for zone in Zone::all() {
            let mut grid = LoadGrid::empty();
            let before = summarize(&grid).loaded_zone_count;
            grid.set(zone, 0.1);
            let after = summarize(&grid).loaded_zone_count;
            assert_eq!(after, before + 1);
        }
    }

    #[test]
    fn test_zone_count_ignores_magnitude() {
        let small = LoadGrid::new([[0.01, 0.0], [0.02, 0.0], [0.0, 0.03]]);
        let large = LoadGrid::new([[2.7, 0.0], [1.0, 0.0], [0.0, 2.5]]);
        assert_eq!(summarize(&small).loaded_zone_count, 3);
        assert_eq!(summarize(&large).loaded_zone_count, 3);
    }

    #[test]
    fn test_custom_dimensions() {
        let dims = TrailerDimensions {
            length: 10.0,
            width: 2.0,
            height: 2.0,
        };
        let summary = summarize_with(&LoadGrid::filled(1.0), &dims);
        assert!((summary.percentage_fill - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_rows_checks_shape_first() {
        let err = summarize_rows(&[vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap_err();
        assert!(matches!(err, LoadError::Shape { .. }));

        let summary = summarize_rows(&[vec![2.7, 2.7], vec![2.7, 2.7], vec![2.7, 2.7]]).unwrap();
        assert_eq!(summary.loaded_zone_count, 6);
    }
}
