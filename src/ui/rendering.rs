//! Canvas rendering for the tiled card grid.
//!
//! Draws every card of the nine tile copies that intersects the viewport,
//! with the hover magnification and image/placeholder content.

use super::images::{contain_rect, ImageSlot};
use super::state::{CardRef, GalleryApp};
use crate::catalog::parse_hex_color;
use crate::constants::*;
use crate::types::*;
use eframe::egui;

/// Background colour of the canvas.
pub const CANVAS_BACKGROUND: egui::Color32 = egui::Color32::WHITE;

/// Accent colour of a work as an egui colour.
pub fn accent_color(work: &WorkItem) -> egui::Color32 {
    parse_hex_color(&work.color)
        .map(|[r, g, b]| egui::Color32::from_rgb(r, g, b))
        .unwrap_or(egui::Color32::from_gray(240))
}

/// Scales `rect` about its center.
pub fn scale_about_center(rect: egui::Rect, scale: f32) -> egui::Rect {
    egui::Rect::from_center_size(rect.center(), rect.size() * scale)
}

impl GalleryApp {
    /// Renders all visible cards of all tiles.
    pub fn render_tiles(&mut self, ctx: &egui::Context, painter: &egui::Painter) {
        painter.rect_filled(self.canvas.viewport, 0.0, CANVAS_BACKGROUND);

        let geometry = self.geometry();
        let tiles = geometry.tiles(self.canvas.position);
        for tile in &tiles {
            for index in 0..geometry.item_count() {
                let card = CardRef {
                    tile_key: tile.key.clone(),
                    index,
                };
                let Some(cell) = self.card_screen_rect(&card) else {
                    continue;
                };
                if !cell.intersects(self.canvas.viewport) {
                    continue;
                }
                self.draw_card(ctx, painter, &card, cell);
            }
        }
    }

    /// Draws one card inside its cell, eased toward its base or hover scale.
    fn draw_card(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        card: &CardRef,
        cell: egui::Rect,
    ) {
        let Some(work) = self.catalog.get(card.index).cloned() else {
            return;
        };
        let hovered = self.canvas.hovered.as_ref() == Some(card);
        let target = if hovered {
            self.config.hover_scale()
        } else {
            self.config.base_scale
        };
        let scale = ctx.animate_value_with_time(
            egui::Id::new(("card_scale", &card.tile_key, work.id)),
            target,
            HOVER_TRANSITION_SECONDS,
        );
        let bounds = scale_about_center(cell, scale);

        self.draw_work_image(ctx, painter, &work, bounds, 1.0);
    }

    /// Draws the image of `work` fitted into `bounds` at `opacity`, or its placeholder.
    pub fn draw_work_image(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        work: &WorkItem,
        bounds: egui::Rect,
        opacity: f32,
    ) {
        if let Some(url) = work.image.as_deref() {
            if let Some(texture) = self.images.texture(ctx, url) {
                let rect = contain_rect(bounds, texture.size_vec2());
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(
                    texture.id(),
                    rect,
                    uv,
                    egui::Color32::WHITE.gamma_multiply(opacity),
                );
                return;
            }
            if matches!(self.images.slot(url), Some(ImageSlot::Pending)) {
                // Keep the cell quiet until the image arrives.
                painter.rect_filled(
                    bounds,
                    bounds.width() * 0.08,
                    accent_color(work).gamma_multiply(0.35 * opacity),
                );
                return;
            }
        }
        draw_placeholder(painter, work, bounds, opacity);
    }
}

/// Accent-coloured card with the work's title, used when there is no image.
fn draw_placeholder(painter: &egui::Painter, work: &WorkItem, bounds: egui::Rect, opacity: f32) {
    painter.rect_filled(
        bounds,
        bounds.width() * 0.08,
        accent_color(work).gamma_multiply(opacity),
    );
    let font_size = (bounds.width() * 0.12).clamp(6.0, 48.0);
    painter.text(
        bounds.center(),
        egui::Align2::CENTER_CENTER,
        &work.title,
        egui::FontId::proportional(font_size),
        egui::Color32::from_gray(60).gamma_multiply(opacity),
    );
}
