//! Load input panel: six zone fields, Calculate and Visualize actions

use eframe::egui::{self, Color32, RichText, Ui};
use tracing::{info, warn};
use trailer_app::form::LoadForm;
use trailer_render::viewer::show_viewport;
use trailer_render::{RenderOptions, Scene};
use trailer_types::{LoadError, Zone, LENGTH_ZONES, WIDTH_ZONES};

const END_LABEL_COLOR: Color32 = Color32::from_rgb(40, 90, 200);
const REJECTED_FIELD_COLOR: Color32 = Color32::from_rgb(220, 60, 60);

/// Panel holding the input form and the open viewer, if any
pub struct LoadPanel {
    form: LoadForm,
    render_options: RenderOptions,
    /// Scene shown in the viewer window while it is open
    viewer_scene: Option<Scene>,
    /// Field named by the last rejected input
    rejected_zone: Option<Zone>,
}

impl LoadPanel {
    pub fn new(render_options: RenderOptions) -> Self {
        Self {
            form: LoadForm::new(),
            render_options,
            viewer_scene: None,
            rejected_zone: None,
        }
    }

    /// Render the panel UI
    pub fn ui(&mut self, ui: &mut Ui) {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("FRONT").strong().color(END_LABEL_COLOR));
        });
        ui.add_space(4.0);

        ui.vertical_centered(|ui| {
            egui::Grid::new("zone_fields")
                .num_columns(WIDTH_ZONES)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for row in 0..LENGTH_ZONES {
                        for col in 0..WIDTH_ZONES {
                            let zone = Zone::new(row, col);
                            let mut field = egui::TextEdit::singleline(self.form.field_mut(zone))
                                .desired_width(90.0);
                            if self.rejected_zone == Some(zone) {
                                field = field.text_color(REJECTED_FIELD_COLOR);
                            }
                            ui.add(field);
                        }
                        ui.end_row();
                    }
                });
        });

        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("REAR").strong().color(END_LABEL_COLOR));
        });

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Calculate").clicked() {
                self.on_calculate();
            }
            if ui.button("Visualize").clicked() {
                self.on_visualize();
            }
        });

        ui.add_space(10.0);
        ui.label(self.form.percentage_text());
        ui.label(self.form.zones_text());
    }

    /// Keep the viewer window alive until the user closes it
    pub fn show_viewer(&mut self, ctx: &egui::Context) {
        let still_open = match &self.viewer_scene {
            Some(scene) => show_viewport(ctx, scene),
            None => return,
        };
        if !still_open {
            self.viewer_scene = None;
        }
    }

    fn on_calculate(&mut self) {
        match self.form.calculate() {
            Ok(summary) => {
                self.rejected_zone = None;
                info!(
                    percentage_fill = summary.percentage_fill,
                    loaded_zones = summary.loaded_zone_count,
                    "Calculated load"
                );
            }
            Err(e) => self.reject(&e),
        }
    }

    fn on_visualize(&mut self) {
        match self.form.visualize() {
            Ok(grid) => {
                self.rejected_zone = None;
                let scene = Scene::build(&grid, self.form.dimensions(), &self.render_options);
                self.viewer_scene = Some(scene);
            }
            Err(e) => self.reject(&e),
        }
    }

    fn reject(&mut self, err: &LoadError) {
        self.rejected_zone = err.zone();
        show_input_error(err);
    }
}

/// Modal error box; blocks until dismissed
fn show_input_error(err: &LoadError) {
    warn!("Rejected input: {}", err);
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Input Error")
        .set_description(err.to_string())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
