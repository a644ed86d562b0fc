//! Output formatting module

use serde::Serialize;
use trailer_domain::service::{normalized, zone_report};
use trailer_domain::{LoadGrid, LoadSummary, TrailerDimensions};
use trailer_types::{OutputFormat, Result, LENGTH_ZONES, WIDTH_ZONES};

#[derive(Serialize)]
struct DetailedOutput<'a> {
    grid: &'a LoadGrid,
    fill_fractions: [[f64; WIDTH_ZONES]; LENGTH_ZONES],
    summary: &'a LoadSummary,
}

pub fn output_summary(
    output_format: OutputFormat,
    grid: &LoadGrid,
    dims: &TrailerDimensions,
    summary: &LoadSummary,
    detailed: bool,
) -> Result<()> {
    match (output_format, detailed) {
        (OutputFormat::Json, false) => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
        (OutputFormat::Json, true) => {
            let output = DetailedOutput {
                grid,
                fill_fractions: normalized(grid, dims),
                summary,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        (OutputFormat::Table, false) => println!("{}", summary),
        (OutputFormat::Table, true) => print!("{}", zone_report(grid, dims)),
    }

    Ok(())
}
