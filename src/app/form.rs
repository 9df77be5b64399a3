use eframe::egui;
use egui::{Align2, Color32, RichText};

use crate::controllers::NoticeLevel;
use crate::data::inputs::ParameterForm;

use super::RcApp;

impl RcApp {
    /// Left panel: five labelled fields, the two action buttons and the latest notice.
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui) {
        let labels = self.labels.clone();
        let mut submit = false;

        ui.add_space(4.0);
        let ParameterForm {
            resistance,
            capacitance,
            v0,
            t_final,
            step,
        } = &mut self.form;
        egui::Grid::new("parameter_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for (label, field) in [
                    (labels.resistance, resistance),
                    (labels.capacitance, capacitance),
                    (labels.v0, v0),
                    (labels.t_final, t_final),
                    (labels.step, step),
                ] {
                    ui.label(label);
                    let resp = ui.add(egui::TextEdit::singleline(field).desired_width(120.0));
                    // Enter in any field behaves like the generate button.
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        let generate = format!("{} {}", egui_phosphor::regular::CHART_LINE, labels.generate);
        if ui.button(generate).clicked() {
            submit = true;
        }
        if submit {
            self.run_simulation();
        }

        let save = format!("{} {}", egui_phosphor::regular::FLOPPY_DISK, labels.save);
        if ui
            .add_enabled(self.controller.can_export(), egui::Button::new(save))
            .clicked()
        {
            self.save_results();
        }

        ui.separator();
        match self.controller.last_notice() {
            Some(n) if n.level == NoticeLevel::Error => {
                ui.label(RichText::new(&n.text).color(Color32::LIGHT_RED));
            }
            Some(n) => {
                ui.label(&n.text);
            }
            None => {
                ui.label(RichText::new(labels.idle_hint).italics());
            }
        }
    }

    /// Modal-style window repeating the latest error until dismissed.
    pub(super) fn render_error_window(&mut self, ctx: &egui::Context) {
        if !self.show_error_window {
            return;
        }
        let Some(notice) = self.controller.last_notice().filter(|n| n.is_error()).cloned() else {
            self.show_error_window = false;
            return;
        };
        let mut dismissed = false;
        egui::Window::new(format!(
            "{} {}",
            egui_phosphor::regular::WARNING_CIRCLE,
            self.labels.error_title
        ))
        .id(egui::Id::new("error_window"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&notice.text);
            if ui.button(self.labels.dismiss).clicked() {
                dismissed = true;
            }
        });
        if dismissed {
            self.show_error_window = false;
        }
    }
}
