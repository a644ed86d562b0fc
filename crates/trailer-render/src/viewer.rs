//! Viewer window for a rendered scene

use eframe::egui::{self, Color32, Sense};
use trailer_types::{Error, Result};
use tracing::debug;

use crate::paint::paint_scene;
use crate::projection::Camera;
use crate::scene::{Scene, SCENE_TITLE};

const VIEWER_SIZE: [f32; 2] = [960.0, 540.0];
const VIEWER_MIN_SIZE: [f32; 2] = [480.0, 270.0];

/// Standalone eframe app that only shows one scene
pub struct ViewerApp {
    scene: Scene,
    camera: Camera,
}

impl ViewerApp {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            camera: Camera::default(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        scene_panel(ctx, &self.scene, &self.camera);
    }
}

fn scene_panel(ctx: &egui::Context, scene: &Scene, camera: &Camera) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(Color32::WHITE))
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
            paint_scene(&painter, response.rect, scene, camera);
        });
}

fn viewport_builder() -> egui::ViewportBuilder {
    egui::ViewportBuilder::default()
        .with_title(SCENE_TITLE)
        .with_inner_size(VIEWER_SIZE)
        .with_min_inner_size(VIEWER_MIN_SIZE)
}

/// Open a native window showing `scene`; blocks until it is closed
pub fn show(scene: Scene) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: viewport_builder(),
        ..Default::default()
    };

    debug!(bars = scene.bars.len(), "opening viewer window");
    eframe::run_native(
        SCENE_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new(scene)))),
    )
    .map_err(|e| Error::Viewer(e.to_string()))
}

/// Show `scene` in a secondary viewport of a running app.
///
/// Returns `false` once the user has asked to close the window.
pub fn show_viewport(ctx: &egui::Context, scene: &Scene) -> bool {
    let camera = Camera::default();
    let mut open = true;
    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("trailer_load_viewer"),
        viewport_builder(),
        |ctx, _class| {
            scene_panel(ctx, scene, &camera);
            if ctx.input(|i| i.viewport().close_requested()) {
                open = false;
            }
        },
    );
    open
}
