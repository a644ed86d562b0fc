//! Domain services

pub mod aggregator;
pub mod report;

pub use aggregator::{normalized, summarize, summarize_rows, summarize_with};
pub use report::{position_label, zone_report};
