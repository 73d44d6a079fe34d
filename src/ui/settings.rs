//! Settings button and panel for the grid layout.

use super::state::GalleryApp;
use crate::constants::*;
use eframe::egui;

impl GalleryApp {
    /// Draws the gear button and, when open, the settings window.
    pub fn show_settings_ui(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("settings_button"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-24.0, 16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let label = if self.show_settings { "✖" } else { "⚙" };
                if ui
                    .add(egui::Button::new(egui::RichText::new(label).size(18.0)))
                    .on_hover_text("页面设置 (S)")
                    .clicked()
                {
                    self.toggle_settings();
                }
            });

        if !self.show_settings {
            return;
        }

        let mut open = true;
        egui::Window::new("页面设置")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-24.0, 64.0))
            .show(ctx, |ui| {
                self.settings_contents(ui);
            });
        if !open {
            self.show_settings = false;
        }
    }

    /// Flips the settings panel.
    pub fn toggle_settings(&mut self) {
        self.show_settings = !self.show_settings;
        log::debug!("Settings panel {}", if self.show_settings { "opened" } else { "closed" });
    }

    fn settings_contents(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                ui.label("间距");
                let mut gap = self.config.gap;
                if ui
                    .add(
                        egui::Slider::new(&mut gap, GAP_RANGE)
                            .step_by(1.0)
                            .custom_formatter(|v, _| format!("{v:.0}px")),
                    )
                    .changed()
                {
                    self.config.set_gap(gap);
                }
                ui.end_row();

                ui.label("缩放");
                let mut scale = self.config.base_scale;
                if ui
                    .add(
                        egui::Slider::new(&mut scale, BASE_SCALE_RANGE)
                            .step_by(0.05)
                            .custom_formatter(|v, _| format!("{:.0}%", v * 100.0)),
                    )
                    .changed()
                {
                    self.config.set_base_scale(scale);
                }
                ui.end_row();

                ui.label("视图");
                ui.horizontal(|ui| {
                    if ui.small_button("-").clicked() {
                        self.config.zoom_out();
                    }
                    let mut zoom = self.config.viewport_zoom;
                    if ui
                        .add(
                            egui::Slider::new(&mut zoom, VIEWPORT_ZOOM_RANGE)
                                .step_by(f64::from(VIEWPORT_ZOOM_STEP))
                                .custom_formatter(|v, _| format!("{v:.1}x")),
                        )
                        .changed()
                    {
                        self.config.set_viewport_zoom(zoom);
                    }
                    if ui.small_button("+").clicked() {
                        self.config.zoom_in();
                    }
                });
                ui.end_row();
            });
    }
}
