//! Draw a scene with the egui painter

use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

use crate::color::shade;
use crate::projection::{Camera, Point3, Projected, ScreenFit};
use crate::scene::{Face, Scene};

const TITLE_HEIGHT: f32 = 32.0;
const MARGIN: f64 = 0.06;

fn to_color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

fn to_pos(xy: [f64; 2]) -> Pos2 {
    Pos2::new(xy[0] as f32, xy[1] as f32)
}

/// Faces turned toward the camera, in painting order.
///
/// Bars are ordered far to near by their floor centers; the visible faces of
/// one box never overlap each other, so no ordering is needed within a bar.
pub fn visible_faces(scene: &Scene, camera: &Camera) -> Vec<Face> {
    let mut bars: Vec<_> = scene.bars.iter().collect();
    bars.sort_by(|a, b| {
        let da = camera.project(a.floor_center()).depth;
        let db = camera.project(b.floor_center()).depth;
        da.total_cmp(&db)
    });

    bars.into_iter()
        .flat_map(|bar| bar.faces())
        .filter(|face| camera.faces_viewer(face.normal))
        .collect()
}

/// Paint `scene` into `rect`: title on top, bars back to front, then the
/// hold outline and end labels.
pub fn paint_scene(painter: &Painter, rect: Rect, scene: &Scene, camera: &Camera) {
    painter.rect_filled(rect, 0.0, Color32::WHITE);

    painter.text(
        rect.center_top() + egui::vec2(0.0, 8.0),
        Align2::CENTER_TOP,
        scene.title,
        FontId::proportional(16.0),
        Color32::BLACK,
    );

    let plot = Rect::from_min_max(rect.min + egui::vec2(0.0, TITLE_HEIGHT), rect.max);
    let extent: Vec<Projected> = scene
        .extent_points()
        .into_iter()
        .map(|p| camera.project(p))
        .collect();
    let fit = ScreenFit::new(
        &extent,
        [plot.center().x as f64, plot.center().y as f64],
        plot.width() as f64,
        plot.height() as f64,
        MARGIN,
    );
    let screen = |p: Point3| to_pos(fit.apply(camera.project(p)));

    for face in visible_faces(scene, camera) {
        let points: Vec<Pos2> = face.corners.iter().map(|&c| screen(c)).collect();
        let edge = to_color(shade(face.color, 0.6));
        painter.add(Shape::convex_polygon(points, to_color(face.color), Stroke::new(0.5, edge)));
    }

    let outline = Stroke::new(1.2, Color32::BLACK);
    for [a, b] in &scene.edges {
        painter.line_segment([screen(*a), screen(*b)], outline);
    }

    for label in &scene.labels {
        painter.text(
            screen(label.anchor),
            Align2::CENTER_BOTTOM,
            label.text,
            FontId::proportional(12.0),
            Color32::BLUE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::RenderOptions;
    use trailer_domain::{LoadGrid, TrailerDimensions};

    fn scene_for(grid: LoadGrid) -> Scene {
        Scene::build(&grid, &TrailerDimensions::STANDARD, &RenderOptions::default())
    }

    #[test]
    fn test_near_short_bar_painted_after_far_tall_bar() {
        let scene = scene_for(LoadGrid::new([[0.1, 2.7], [0.0, 0.0], [0.0, 0.0]]));
        let camera = Camera::default();
        let order = visible_faces(&scene, &camera);

        let near_top = scene.bars[0].faces().pop().unwrap();
        let near_top_at = order.iter().position(|f| *f == near_top).unwrap();
        for face in scene.bars[1].faces() {
            if let Some(at) = order.iter().position(|f| *f == face) {
                assert!(at < near_top_at);
            }
        }
    }

    #[test]
    fn test_full_bar_shows_three_faces() {
        let scene = scene_for(LoadGrid::filled(1.0));
        let order = visible_faces(&scene, &Camera::default());
        assert_eq!(order.len(), 6 * 3);
        assert!(order.iter().all(|f| f.normal != [0.0, 0.0, -1.0]));
    }

    #[test]
    fn test_empty_bars_show_floor_squares() {
        let scene = scene_for(LoadGrid::empty());
        assert_eq!(visible_faces(&scene, &Camera::default()).len(), 6);
    }
}
