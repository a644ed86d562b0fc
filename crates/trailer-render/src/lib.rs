//! 3D bar-chart rendering of a trailer load grid.
//!
//! The scene is built from plain geometry ([`scene`]) and drawn with the
//! egui painter ([`paint`]), either in a standalone window or as a viewport
//! of a running app ([`viewer`]).

pub mod color;
pub mod paint;
pub mod projection;
pub mod scene;
pub mod viewer;

pub use projection::Camera;
pub use scene::{RenderOptions, Scene};

use tracing::info;
use trailer_domain::{LoadGrid, TrailerDimensions};
use trailer_types::Result;

/// Render `grid` in a blocking viewer window
pub fn render(grid: &LoadGrid, dims: &TrailerDimensions, options: &RenderOptions) -> Result<()> {
    let scene = Scene::build(grid, dims, options);
    info!("Opening load visualization");
    viewer::show(scene)
}

/// Render dynamically shaped rows; fails with a shape error before any window opens
pub fn render_rows(rows: &[Vec<f64>], dims: &TrailerDimensions, options: &RenderOptions) -> Result<()> {
    let scene = Scene::from_rows(rows, dims, options)?;
    info!("Opening load visualization");
    viewer::show(scene)
}
