//! Per-zone load report

use trailer_types::Zone;

use crate::model::{LoadGrid, TrailerDimensions};
use crate::service::aggregator::summarize_with;

/// Human-readable position of a zone, e.g. "front left"
pub fn position_label(zone: Zone) -> &'static str {
    match (zone.row, zone.col) {
        (0, 0) => "front left",
        (0, _) => "front right",
        (1, 0) => "middle left",
        (1, _) => "middle right",
        (_, 0) => "rear left",
        _ => "rear right",
    }
}

pub fn zone_report(grid: &LoadGrid, dims: &TrailerDimensions) -> String {
    let summary = summarize_with(grid, dims);

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                Trailer Load Report               \n");
    report.push_str("==================================================\n\n");
    report.push_str(&format!(
        "  Hold (L x W x H):   {:.3} x {:.2} x {:.2}\n\n",
        dims.length, dims.width, dims.height
    ));
    report.push_str(&format!(
        "{:<18} {:<14} {:>8} {:>8}\n",
        "Zone", "Position", "Height", "Fill"
    ));
    report.push_str("-".repeat(50).as_str());
    report.push('\n');
    for (zone, height) in grid.iter() {
        let fill = height / dims.height * 100.0;
        report.push_str(&format!(
            "{:<18} {:<14} {:>8.2} {:>7.1}%\n",
            zone.to_string(),
            position_label(zone),
            height,
            fill
        ));
    }
    report.push_str("-".repeat(50).as_str());
    report.push('\n');
    report.push_str(&summary.to_string());
    report.push('\n');
    report.push_str("==================================================\n");
    report
}
