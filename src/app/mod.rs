//! egui front end of the simulator.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`form`]   | Parameter form, generate/save buttons, error window |
//! | [`plot`]   | Voltage/current chart of the held result |
//! | [`run`]    | [`run_rc_app()`] entry point and native window options |
//!
//! All numeric work goes through [`SimulationController`]; the view only keeps
//! the text of the form and a few presentation flags.

mod form;
mod plot;
mod run;

pub use run::run_rc_app;

use std::path::PathBuf;

use eframe::egui;

use crate::config::{Labels, RcAppConfig};
use crate::controllers::SimulationController;
use crate::data::inputs::ParameterForm;
use crate::persistence;

/// Standalone simulator window that implements [`eframe::App`].
pub struct RcApp {
    pub controller: SimulationController,
    /// Text currently typed in the five fields.
    pub form: ParameterForm,
    pub config: RcAppConfig,
    labels: Labels,
    /// Where the last submitted form is remembered, if anywhere.
    state_path: Option<PathBuf>,
    show_error_window: bool,
    reset_view: bool,
}

impl RcApp {
    pub fn new(config: RcAppConfig, state_path: Option<PathBuf>) -> Self {
        let labels = config.labels();
        let form = state_path
            .as_deref()
            .filter(|p| p.exists())
            .and_then(|p| match persistence::load_form_from_path(p) {
                Ok(form) => Some(form),
                Err(e) => {
                    log::warn!("could not restore the previous form: {e}");
                    None
                }
            })
            .unwrap_or_else(|| config.defaults.clone());
        Self {
            controller: SimulationController::new(labels.clone()),
            form,
            config,
            labels,
            state_path,
            show_error_window: false,
            reset_view: false,
        }
    }

    /// Generate action: simulate the current form and remember it on success.
    pub(crate) fn run_simulation(&mut self) {
        let ok = self.controller.generate(&self.form).is_ok();
        if ok {
            self.reset_view = true;
            self.show_error_window = false;
            if let Some(path) = &self.state_path {
                if let Err(e) = persistence::save_form_to_path(&self.form, path) {
                    log::warn!("could not remember the form: {e}");
                }
            }
        } else {
            self.show_error_window = true;
        }
    }

    /// Save action: ask for a destination and export the held result there.
    pub(crate) fn save_results(&mut self) {
        let name = self.controller.suggested_file_name(&chrono::Local::now());
        let Some(path) = rfd::FileDialog::new()
            .set_title(self.labels.save_dialog_title)
            .set_file_name(&name)
            .add_filter(self.labels.csv_filter, &["csv"])
            .save_file()
        else {
            return;
        };
        if self.controller.export_to(&path).is_err() {
            self.show_error_window = true;
        }
    }
}

impl eframe::App for RcApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("parameters")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.render_form(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.render_plot(ui));

        self.render_error_window(ctx);
    }
}
