//! Input form model: six height fields, parsed and validated as a whole.
//!
//! The form never applies a partial update. Either all six fields are
//! accepted and the summary is replaced, or the previous summary stays.

use trailer_domain::model::check_height;
use trailer_domain::{summarize_with, LoadGrid, LoadSummary, TrailerDimensions};
use trailer_types::{LoadError, Zone, LENGTH_ZONES, WIDTH_ZONES};

/// Text every field starts with
pub const INITIAL_FIELD_TEXT: &str = "0";

/// Parse one field as a finite height within `[0, max]`
pub fn parse_field(zone: Zone, text: &str, max: f64) -> Result<f64, LoadError> {
    let value = text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::Parse {
            zone,
            input: text.to_string(),
        })?;
    check_height(zone, value, max)
}

/// State of the input form for one session
#[derive(Debug, Clone)]
pub struct LoadForm {
    fields: [[String; WIDTH_ZONES]; LENGTH_ZONES],
    summary: Option<LoadSummary>,
    dims: TrailerDimensions,
}

impl Default for LoadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadForm {
    pub fn new() -> Self {
        Self::with_dimensions(TrailerDimensions::STANDARD)
    }

    pub fn with_dimensions(dims: TrailerDimensions) -> Self {
        Self {
            fields: std::array::from_fn(|_| std::array::from_fn(|_| INITIAL_FIELD_TEXT.to_string())),
            summary: None,
            dims,
        }
    }

    pub fn dimensions(&self) -> &TrailerDimensions {
        &self.dims
    }

    pub fn field(&self, zone: Zone) -> &str {
        &self.fields[zone.row][zone.col]
    }

    /// Mutable field text, for binding to a text edit widget
    pub fn field_mut(&mut self, zone: Zone) -> &mut String {
        &mut self.fields[zone.row][zone.col]
    }

    pub fn set_field(&mut self, zone: Zone, text: impl Into<String>) {
        self.fields[zone.row][zone.col] = text.into();
    }

    /// Parse and validate all fields, stopping at the first bad one
    pub fn read_grid(&self) -> Result<LoadGrid, LoadError> {
        let mut grid = LoadGrid::empty();
        for zone in Zone::all() {
            let height = parse_field(zone, self.field(zone), self.dims.height)?;
            grid.set(zone, height);
        }
        Ok(grid)
    }

    /// Calculate action: replace the displayed summary on success only
    pub fn calculate(&mut self) -> Result<LoadSummary, LoadError> {
        let grid = self.read_grid()?;
        let summary = summarize_with(&grid, &self.dims);
        self.summary = Some(summary);
        Ok(summary)
    }

    /// Visualize action: the validated grid to hand to the renderer
    pub fn visualize(&self) -> Result<LoadGrid, LoadError> {
        self.read_grid()
    }

    /// Most recent successful calculation
    pub fn summary(&self) -> Option<&LoadSummary> {
        self.summary.as_ref()
    }

    pub fn percentage_text(&self) -> String {
        self.summary
            .map(|s| s.percentage_line())
            .unwrap_or_else(|| "Total cargo load: -".to_string())
    }

    pub fn zones_text(&self) -> String {
        self.summary
            .map(|s| s.zones_line())
            .unwrap_or_else(|| "Loaded zones: -".to_string())
    }
}
