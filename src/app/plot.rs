//! Chart of the held simulation result.

use eframe::egui;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use super::RcApp;

fn color(rgba: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

impl RcApp {
    pub(super) fn render_plot(&mut self, ui: &mut egui::Ui) {
        let labels = &self.labels;
        ui.heading(labels.plot_title);

        if let Some(result) = self.controller.result() {
            let circuit = result.inputs().circuit;
            ui.label(format!(
                "{}: {:.6e} s  |  {} samples  |  V0 = {} V  |  I0 = {:.6e} A",
                labels.time_constant,
                result.time_constant(),
                result.len(),
                circuit.v0,
                circuit.initial_current(),
            ));
            if let (Some(t), Some(v), Some(i)) = (
                result.time().last(),
                result.final_voltage(),
                result.final_current(),
            ) {
                ui.label(format!("t = {t} s: {v:.6e} V, {i:.6e} A"));
            }
        }

        let mut plot = Plot::new("rc_transient_plot")
            .legend(Legend::default())
            .show_grid(true)
            .allow_scroll(false)
            .allow_boxed_zoom(true)
            .x_axis_label(labels.x_axis)
            .y_axis_label(labels.y_axis);
        if self.reset_view {
            plot = plot.reset();
            self.reset_view = false;
        }

        let series = self.controller.result().map(|r| {
            (
                PlotPoints::from(r.voltage_points()),
                PlotPoints::from(r.current_points()),
            )
        });
        let voltage_color = color(self.config.voltage_color);
        let current_color = color(self.config.current_color);
        plot.show(ui, |plot_ui| {
            if let Some((voltage, current)) = series {
                plot_ui.line(Line::new(labels.voltage_series, voltage).color(voltage_color));
                plot_ui.line(Line::new(labels.current_series, current).color(current_color));
            }
        });
    }
}
