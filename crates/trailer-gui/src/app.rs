//! Main application structure

use eframe::egui;
use trailer_app::config::Config;
use tracing::warn;

use crate::load_panel::LoadPanel;

/// Main application state
pub struct TrailerLoadApp {
    /// Zone input form and results
    load_panel: LoadPanel,
}

impl TrailerLoadApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_else(|e| {
            warn!("Falling back to default configuration: {}", e);
            Config::default()
        });

        Self {
            load_panel: LoadPanel::new(config.render_options()),
        }
    }
}

impl eframe::App for TrailerLoadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.load_panel.ui(ui);
        });

        self.load_panel.show_viewer(ctx);
    }
}
