//! Domain model types

pub mod grid;
pub mod summary;
pub mod trailer;

pub use grid::{check_height, LoadGrid};
pub use summary::LoadSummary;
pub use trailer::TrailerDimensions;
