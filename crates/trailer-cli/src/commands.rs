//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::output_summary;
use tracing::{debug, info};
use trailer_app::config::Config;
use trailer_app::form::parse_field;
use trailer_domain::{summarize_with, LoadGrid, TrailerDimensions};
use trailer_types::{LoadError, OutputFormat, Result, Zone};

/// Grid summarized when no `--zones` are given
pub const EXAMPLE_GRID: LoadGrid = LoadGrid::new([[0.5, 1.0], [1.5, 2.0], [0.0, 0.0]]);

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Config {
            show,
            set_format,
            set_bar_fill_length,
            set_bar_fill_width,
            set_visualize,
            reset,
        }) => cmd_config(
            *show,
            *set_format,
            *set_bar_fill_length,
            *set_bar_fill_width,
            *set_visualize,
            *reset,
        ),

        None => {
            let config = Config::load()?;
            let output_format = cli.format.unwrap_or(config.output_format);
            let visualize = cli.visualize || config.visualize;
            cmd_summary(
                &config,
                cli.zones.as_deref(),
                output_format,
                cli.detailed,
                visualize,
            )
        }
    }
}

/// Parse `--zones` text into a validated grid
pub fn parse_zones(text: &str, dims: &TrailerDimensions) -> std::result::Result<LoadGrid, LoadError> {
    let values = text
        .split(',')
        .enumerate()
        .map(|(index, field)| match Zone::from_index(index) {
            Some(zone) => parse_field(zone, field, dims.height),
            // Past the last zone; the shape check below rejects the count
            None => Ok(f64::NAN),
        })
        .collect::<std::result::Result<Vec<f64>, LoadError>>()?;
    LoadGrid::from_flat(&values)
}

fn cmd_summary(
    config: &Config,
    zones: Option<&str>,
    output_format: OutputFormat,
    detailed: bool,
    visualize: bool,
) -> Result<()> {
    let dims = TrailerDimensions::STANDARD;

    let grid = match zones {
        Some(text) => parse_zones(text, &dims)?,
        None => {
            debug!("no zones given, using the example grid");
            EXAMPLE_GRID
        }
    };
    grid.validate(&dims)?;

    let summary = summarize_with(&grid, &dims);
    debug!(
        percentage_fill = summary.percentage_fill,
        loaded_zones = summary.loaded_zone_count,
        "grid summarized"
    );
    output_summary(output_format, &grid, &dims, &summary, detailed)?;

    if visualize {
        info!("Close the viewer window to exit");
        trailer_render::render(&grid, &dims, &config.render_options())?;
    }

    Ok(())
}

fn cmd_config(
    show: bool,
    set_format: Option<OutputFormat>,
    set_bar_fill_length: Option<f64>,
    set_bar_fill_width: Option<f64>,
    set_visualize: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_format {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(fraction) = set_bar_fill_length {
        config.bar_fill_length = fraction;
        modified = true;
    }

    if let Some(fraction) = set_bar_fill_width {
        config.bar_fill_width = fraction;
        modified = true;
    }

    if let Some(visualize) = set_visualize {
        config.visualize = visualize;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailer_domain::summarize;
    use trailer_types::RangeBound;

    #[test]
    fn test_example_grid_summary() {
        let summary = summarize(&EXAMPLE_GRID);
        assert_eq!(
            summary.to_string(),
            "Total cargo load: 30.86 %\nLoaded zones: 4/6"
        );
    }

    #[test]
    fn test_parse_zones_row_major() {
        let grid = parse_zones("2.7,2.7,2.7,2.7,2.7,2.7", &TrailerDimensions::STANDARD).unwrap();
        assert_eq!(grid, LoadGrid::filled(2.7));

        let grid = parse_zones("0.5, 1, 1.5, 2, 0, 0", &TrailerDimensions::STANDARD).unwrap();
        assert_eq!(grid, EXAMPLE_GRID);
    }

    #[test]
    fn test_parse_zones_wrong_count_is_shape_error() {
        let err = parse_zones("1,2,3", &TrailerDimensions::STANDARD).unwrap_err();
        assert_eq!(
            err,
            LoadError::Shape {
                found: "3 values".to_string()
            }
        );
    }

    #[test]
    fn test_parse_zones_extra_fields_are_shape_error() {
        let err = parse_zones("0,0,0,0,0,0,abc", &TrailerDimensions::STANDARD).unwrap_err();
        assert_eq!(
            err,
            LoadError::Shape {
                found: "7 values".to_string()
            }
        );
    }

    #[test]
    fn test_parse_zones_range_and_parse_errors() {
        let dims = TrailerDimensions::STANDARD;
        let err = parse_zones("0,0,0,3.0,0,0", &dims).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Range {
                zone: Zone { row: 1, col: 1 },
                bound: RangeBound::Maximum(_),
                ..
            }
        ));

        let err = parse_zones("0,abc,0,0,0,0", &dims).unwrap_err();
        assert!(matches!(err, LoadError::Parse { zone: Zone { row: 0, col: 1 }, .. }));
    }
}
