//! Scene geometry: zone bars, the hold wireframe, and end labels

use serde::{Deserialize, Serialize};
use trailer_domain::{LoadGrid, TrailerDimensions};
use trailer_types::{LoadError, Zone};

use crate::color::{fill_color, shade};
use crate::projection::Point3;

pub const SCENE_TITLE: &str = "Trailer Cargo Load Visualization";

/// Corner index pairs of the hold outline: bottom, top, then uprights
#[rustfmt::skip]
pub const HOLD_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Bar footprint as a fraction of its zone cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub bar_fill_length: f64,
    pub bar_fill_width: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bar_fill_length: 0.98,
            bar_fill_width: 0.95,
        }
    }
}

/// One upright bar standing in a zone
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub zone: Zone,
    /// Floor corner nearest the front-left of the hold
    pub origin: Point3,
    /// Extent along length, width, and height
    pub size: Point3,
    pub color: [u8; 3],
}

/// A quadrilateral face of a bar
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Outward unit normal
    pub normal: Point3,
    pub corners: [Point3; 4],
    pub color: [u8; 3],
}

impl Bar {
    /// Center of the bar's footprint on the floor
    pub fn floor_center(&self) -> Point3 {
        [
            self.origin[0] + self.size[0] / 2.0,
            self.origin[1] + self.size[1] / 2.0,
            self.origin[2],
        ]
    }

    /// Faces to draw; a zero-height bar is only its floor square
    pub fn faces(&self) -> Vec<Face> {
        let [x0, y0, z0] = self.origin;
        let [x1, y1, z1] = [x0 + self.size[0], y0 + self.size[1], z0 + self.size[2]];
        let top = Face {
            normal: [0.0, 0.0, 1.0],
            corners: [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]],
            color: self.color,
        };
        if self.size[2] <= 0.0 {
            return vec![top];
        }

        let side = |normal: Point3, corners: [Point3; 4], factor: f64| Face {
            normal,
            corners,
            color: shade(self.color, factor),
        };
        vec![
            side(
                [0.0, 0.0, -1.0],
                [[x0, y0, z0], [x1, y0, z0], [x1, y1, z0], [x0, y1, z0]],
                0.5,
            ),
            side([0.0, -1.0, 0.0], [[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]], 0.8),
            side([0.0, 1.0, 0.0], [[x0, y1, z0], [x1, y1, z0], [x1, y1, z1], [x0, y1, z1]], 0.8),
            side([-1.0, 0.0, 0.0], [[x0, y0, z0], [x0, y1, z0], [x0, y1, z1], [x0, y0, z1]], 0.65),
            side([1.0, 0.0, 0.0], [[x1, y0, z0], [x1, y1, z0], [x1, y1, z1], [x1, y0, z1]], 0.65),
            top,
        ]
    }
}

/// Text anchored at a world position, drawn centered above it
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: &'static str,
    pub anchor: Point3,
}

/// Everything the painter needs, in world coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: &'static str,
    pub dims: TrailerDimensions,
    pub bars: Vec<Bar>,
    pub edges: Vec<[Point3; 2]>,
    pub labels: Vec<Label>,
}

impl Scene {
    pub fn build(grid: &LoadGrid, dims: &TrailerDimensions, options: &RenderOptions) -> Self {
        let zone_length = dims.zone_length();
        let zone_width = dims.zone_width();

        let bars = grid
            .iter()
            .map(|(zone, height)| Bar {
                zone,
                origin: [zone.row as f64 * zone_length, zone.col as f64 * zone_width, 0.0],
                size: [
                    zone_length * options.bar_fill_length,
                    zone_width * options.bar_fill_width,
                    height,
                ],
                color: fill_color(height / dims.height),
            })
            .collect();

        let corners = hold_corners(dims);
        let edges = HOLD_EDGES
            .iter()
            .map(|&(a, b)| [corners[a], corners[b]])
            .collect();

        let label_z = dims.height * 1.05;
        let labels = vec![
            Label {
                text: "FRONT",
                anchor: [0.0, dims.width / 2.0, label_z],
            },
            Label {
                text: "REAR",
                anchor: [dims.length, dims.width / 2.0, label_z],
            },
        ];

        Self {
            title: SCENE_TITLE,
            dims: *dims,
            bars,
            edges,
            labels,
        }
    }

    /// Build from dynamically shaped rows, rejecting anything but 3x2
    pub fn from_rows(
        rows: &[Vec<f64>],
        dims: &TrailerDimensions,
        options: &RenderOptions,
    ) -> Result<Self, LoadError> {
        let grid = LoadGrid::from_rows(rows)?;
        Ok(Self::build(&grid, dims, options))
    }

    /// Every world point the view has to contain
    pub fn extent_points(&self) -> Vec<Point3> {
        let mut points: Vec<Point3> = hold_corners(&self.dims).to_vec();
        points.extend(self.labels.iter().map(|label| label.anchor));
        points.extend(self.bars.iter().map(|bar| {
            [bar.origin[0], bar.origin[1], bar.origin[2] + bar.size[2]]
        }));
        points
    }
}

/// Corners of the hold box, floor first, counter-clockwise from the origin
#[rustfmt::skip]
pub fn hold_corners(dims: &TrailerDimensions) -> [Point3; 8] {
    let (l, w, h) = (dims.length, dims.width, dims.height);
    [
        [0.0, 0.0, 0.0], [l, 0.0, 0.0], [l, w, 0.0], [0.0, w, 0.0],
        [0.0, 0.0, h], [l, 0.0, h], [l, w, h], [0.0, w, h],
    ]
}
