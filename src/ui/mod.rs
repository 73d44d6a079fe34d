//! User interface components and rendering logic for the gallery.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main [`GalleryApp`]
//! - `canvas` - Pointer/wheel handling and screen/canvas transforms
//! - `rendering` - Drawing the tiled cards
//! - `detail` - The detail overlay for a clicked card
//! - `settings` - The layout settings panel
//! - `images` - Background image fetching and texture cache
//! - `fonts` - CJK system font fallback

mod canvas;
mod detail;
mod fonts;
mod images;
mod rendering;
mod settings;
mod state;

#[cfg(test)]
mod tests;

pub use images::ImageLoadError;
pub use state::GalleryApp;

use crate::constants::ZOOM_TRANSITION_SECONDS;
use crate::roam::wall_clock_epoch;
use crate::transition::TransitionEvent;
use eframe::egui;

/// Storage key the persisted settings live under.
const STORAGE_KEY: &str = "gallery_state";

impl eframe::App for GalleryApp {
    /// Saves the layout settings to persistent storage.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => storage.set_string(STORAGE_KEY, json),
            Err(err) => log::warn!("Failed to serialize gallery settings: {err}"),
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Shutting down gallery");
        self.teardown();
    }
}

impl GalleryApp {
    /// Creates the app, restoring saved settings when available.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        fonts::install_cjk_fallback(&cc.egui_ctx);

        let restored = cc
            .storage
            .and_then(|storage| storage.get_string(STORAGE_KEY))
            .and_then(|json| match Self::from_json(&json) {
                Ok(app) => Some(app),
                Err(err) => {
                    log::warn!("Ignoring unreadable saved settings: {err}");
                    None
                }
            });
        let mut app = restored.unwrap_or_default();
        let now = cc.egui_ctx.input(|i| i.time);
        app.roam.note_interaction(now);
        app.roam.set_epoch(wall_clock_epoch(now));
        log::info!(
            "Gallery started with {} works (gap {}, scale {}, zoom {})",
            app.catalog.len(),
            app.config.gap,
            app.config.base_scale,
            app.config.viewport_zoom
        );
        app
    }

    /// Runs one frame of the gallery UI.
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);

        if let Some(TransitionEvent::Disposed) = self.detail.tick(now) {
            // The closed card may have left a hover target behind it.
            self.canvas.hovered = None;
        }

        self.handle_keyboard(ctx, now);
        self.images.poll(ctx);

        self.show_settings_ui(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_canvas(ui, now);
            });

        self.show_detail(ctx, now);

        if self.roam.is_running() || self.detail.is_animating(now) {
            ctx.request_repaint();
        }
    }

    /// Draws the canvas and processes pointer input for it.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui, now: f64) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        self.canvas.viewport = response.rect;
        self.canvas.zoom = ui.ctx().animate_value_with_time(
            egui::Id::new("viewport_zoom"),
            self.config.viewport_zoom,
            ZOOM_TRANSITION_SECONDS,
        );

        self.handle_canvas_input(ui, now);
        self.step_roam(now);
        self.update_hover(&response);
        self.render_tiles(ui.ctx(), &painter);
    }

    /// Handles keyboard shortcuts: `S` toggles settings, `Escape` closes the detail view.
    fn handle_keyboard(&mut self, ctx: &egui::Context, now: f64) {
        let (any_key, toggle_settings, escape) = ctx.input(|i| {
            let any_key = i
                .events
                .iter()
                .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }));
            (
                any_key,
                i.key_pressed(egui::Key::S) && i.modifiers.is_none(),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if any_key {
            self.roam.note_interaction(now);
        }
        // Typing into a widget must not toggle the panel.
        if toggle_settings && !ctx.wants_keyboard_input() {
            self.toggle_settings();
        }
        if escape && self.detail.is_showing() {
            self.detail.close(now);
        }
    }
}
