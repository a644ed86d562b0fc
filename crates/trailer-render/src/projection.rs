//! Fixed orthographic camera and screen fitting.
//!
//! World axes: x along the trailer length, y across its width, z up.
//! All axes share one scale so bar heights stay physically comparable.

use serde::{Deserialize, Serialize};

pub type Point3 = [f64; 3];

/// Orthographic camera looking at the scene from a fixed direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Angle above the floor plane, in degrees
    pub elevation_deg: f64,
    /// Rotation about the vertical axis, in degrees
    pub azimuth_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            elevation_deg: 30.0,
            azimuth_deg: -60.0,
        }
    }
}

/// A point after projection: screen-plane coordinates plus depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Rightward screen coordinate
    pub x: f64,
    /// Upward screen coordinate
    pub y: f64,
    /// Distance toward the viewer; larger is closer
    pub depth: f64,
}

impl Camera {
    pub fn project(&self, p: Point3) -> Projected {
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();

        let right = [-sa, ca, 0.0];
        let up = [-se * ca, -se * sa, ce];
        let toward_viewer = [ce * ca, ce * sa, se];

        Projected {
            x: dot(p, right),
            y: dot(p, up),
            depth: dot(p, toward_viewer),
        }
    }
}

impl Camera {
    /// Whether a surface with outward `normal` is turned toward the viewer
    pub fn faces_viewer(&self, normal: Point3) -> bool {
        self.project(normal).depth > 0.0
    }
}

fn dot(a: Point3, b: Point3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Uniform scale-and-center mapping from projected coordinates to pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFit {
    scale: f64,
    mid: [f64; 2],
    center: [f64; 2],
}

impl ScreenFit {
    /// Fit `points` into a `width` x `height` area centered at `center`,
    /// leaving `margin` (fraction of the area) free on each side.
    pub fn new(points: &[Projected], center: [f64; 2], width: f64, height: f64, margin: f64) -> Self {
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        if points.is_empty() {
            return Self {
                scale: 1.0,
                mid: [0.0, 0.0],
                center,
            };
        }

        let usable = 1.0 - 2.0 * margin.clamp(0.0, 0.45);
        let span_x = (max_x - min_x).max(f64::EPSILON);
        let span_y = (max_y - min_y).max(f64::EPSILON);
        let scale = (width * usable / span_x).min(height * usable / span_y);

        Self {
            scale,
            mid: [(min_x + max_x) / 2.0, (min_y + max_y) / 2.0],
            center,
        }
    }

    /// Pixel position; screen y grows downward
    pub fn apply(&self, p: Projected) -> [f64; 2] {
        [
            self.center[0] + (p.x - self.mid[0]) * self.scale,
            self.center[1] - (p.y - self.mid[1]) * self.scale,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_origin() {
        let p = Camera::default().project([0.0, 0.0, 0.0]);
        assert!(p.x.abs() < 1e-12 && p.y.abs() < 1e-12 && p.depth.abs() < 1e-12);
    }

    #[test]
    fn test_length_axis_points_right_and_up_is_up() {
        let camera = Camera::default();
        let along_length = camera.project([1.0, 0.0, 0.0]);
        let up = camera.project([0.0, 0.0, 1.0]);
        assert!(along_length.x > 0.0);
        assert!(up.y > 0.0);
        assert!(up.x.abs() < 1e-12);
    }

    #[test]
    fn test_projection_preserves_length() {
        let camera = Camera::default();
        let p = camera.project([3.0, -2.0, 1.5]);
        let len2 = p.x * p.x + p.y * p.y + p.depth * p.depth;
        assert!((len2 - (9.0 + 4.0 + 2.25)).abs() < 1e-9);
    }

    #[test]
    fn test_near_side_is_closer() {
        let camera = Camera::default();
        let near = camera.project([0.0, 0.0, 0.0]);
        let far = camera.project([0.0, 1.0, 0.0]);
        assert!(near.depth > far.depth);
    }

    #[test]
    fn test_visible_sides_from_default_camera() {
        let camera = Camera::default();
        assert!(camera.faces_viewer([0.0, 0.0, 1.0]));
        assert!(camera.faces_viewer([1.0, 0.0, 0.0]));
        assert!(camera.faces_viewer([0.0, -1.0, 0.0]));
        assert!(!camera.faces_viewer([0.0, 0.0, -1.0]));
        assert!(!camera.faces_viewer([-1.0, 0.0, 0.0]));
        assert!(!camera.faces_viewer([0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_fit_is_uniform_and_centered() {
        let points = [
            Projected { x: 0.0, y: 0.0, depth: 0.0 },
            Projected { x: 10.0, y: 2.0, depth: 0.0 },
        ];
        let fit = ScreenFit::new(&points, [100.0, 50.0], 200.0, 100.0, 0.0);
        assert_eq!(fit.apply(points[0]), [0.0, 70.0]);
        assert_eq!(fit.apply(points[1]), [200.0, 30.0]);
    }
}
