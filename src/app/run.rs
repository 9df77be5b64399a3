//! Top-level entry point for running the simulator as a native window.

use std::path::PathBuf;

use eframe::egui;

use crate::config::RcAppConfig;

use super::RcApp;

/// Open the simulator window and block until it is closed.
///
/// `state_path`, when given, is where the last submitted form is restored
/// from on start and saved to after each successful simulation.
pub fn run_rc_app(config: RcAppConfig, state_path: Option<PathBuf>) -> eframe::Result<()> {
    let title = config.title.clone();
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    let app = RcApp::new(config, state_path);
    log::info!("starting {title}");

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
