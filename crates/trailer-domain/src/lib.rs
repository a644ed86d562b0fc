//! Trailer load domain: grid model, dimensions, and aggregation

pub mod constants;
pub mod model;
pub mod service;

pub use model::{LoadGrid, LoadSummary, TrailerDimensions};
pub use service::{summarize, summarize_rows, summarize_with};
