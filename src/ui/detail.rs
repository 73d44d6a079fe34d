//! The detail overlay shown after a card is clicked.
//!
//! The card is drawn with the transform reported by
//! [`DetailTransition::presented`](crate::transition::DetailTransition::presented),
//! so it grows out of the clicked tile and shrinks back into it.

use super::rendering::accent_color;
use super::state::GalleryApp;
use crate::constants::*;
use crate::transition::{CardTransform, DetailPhase};
use crate::types::WorkItem;
use eframe::egui;

const TEXT_STRONG: egui::Color32 = egui::Color32::from_rgb(28, 25, 23);
const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(120, 113, 108);
const CARD_FILL: egui::Color32 = egui::Color32::WHITE;

/// Full-size rectangle of the detail card for a viewport.
pub fn detail_card_rect(viewport: egui::Rect) -> egui::Rect {
    let size = egui::vec2(
        viewport.width().min(DETAIL_MAX_WIDTH),
        viewport.height() * DETAIL_HEIGHT_FRACTION,
    );
    egui::Rect::from_center_size(viewport.center(), size)
}

/// Card rectangle after applying a presentation transform.
pub fn transformed_card_rect(viewport: egui::Rect, transform: &CardTransform) -> egui::Rect {
    let full = detail_card_rect(viewport);
    let center = viewport.center() + egui::vec2(transform.x, transform.y);
    egui::Rect::from_center_size(center, full.size() * transform.scale)
}

impl GalleryApp {
    /// Draws the detail overlay, if a card is selected.
    pub fn show_detail(&mut self, ctx: &egui::Context, now: f64) {
        let phase = self.detail.phase();
        let backdrop_alpha = ctx.animate_bool_with_time(
            egui::Id::new("detail_backdrop"),
            matches!(phase, DetailPhase::Opening | DetailPhase::Open),
            BACKDROP_TRANSITION_SECONDS,
        );
        let (Some(selected), Some(transform)) = (self.detail.selected(), self.detail.presented(now))
        else {
            return;
        };
        let work = selected.data.clone();
        let viewport = self.canvas.viewport;

        let mut close_requested = false;
        egui::Area::new(egui::Id::new("detail_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(viewport.min)
            .show(ctx, |ui| {
                let backdrop = ui.allocate_rect(viewport, egui::Sense::click());
                ui.painter().rect_filled(
                    viewport,
                    0.0,
                    egui::Color32::WHITE.gamma_multiply(0.9 * backdrop_alpha),
                );

                let card = transformed_card_rect(viewport, &transform);
                // Swallows clicks so only the backdrop closes the view.
                ui.interact(card, egui::Id::new("detail_card"), egui::Sense::click());
                self.paint_card(ctx, ui.painter(), &work, card, &transform);

                let close = close_button(ui, card, &transform);
                close_requested = close.clicked() || backdrop.clicked();
            });

        if close_requested {
            self.detail.close(now);
        }
    }

    fn paint_card(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        work: &WorkItem,
        card: egui::Rect,
        transform: &CardTransform,
    ) {
        let s = transform.scale;
        let opacity = transform.opacity;
        let radius = DETAIL_CORNER_RADIUS * s;

        painter.rect_filled(
            card.expand(2.0 * s),
            radius,
            egui::Color32::from_black_alpha((24.0 * opacity) as u8),
        );
        painter.rect_filled(card, radius, CARD_FILL.gamma_multiply(opacity));

        // Wide cards split left/right, narrow ones top/bottom.
        let (image_half, text_half) = if card.width() >= card.height() {
            card.split_left_right_at_fraction(0.5)
        } else {
            card.split_top_bottom_at_fraction(0.5)
        };

        painter.rect_filled(
            image_half,
            radius,
            accent_color(work).gamma_multiply(0.25 * opacity),
        );
        let image_box = image_half.shrink(DETAIL_PADDING * s);
        if image_box.is_positive() {
            self.draw_work_image(ctx, painter, work, image_box, opacity);
        }

        paint_text_column(painter, work, text_half.shrink(DETAIL_PADDING * s), s, opacity);
    }
}

fn paint_text_column(
    painter: &egui::Painter,
    work: &WorkItem,
    area: egui::Rect,
    s: f32,
    opacity: f32,
) {
    if !area.is_positive() {
        return;
    }
    let width = area.width();
    let mut cursor = area.min;

    let pill_text = painter.layout_no_wrap(
        work.category.clone(),
        egui::FontId::proportional(12.0 * s),
        TEXT_MUTED.gamma_multiply(opacity),
    );
    let pill = egui::Rect::from_min_size(cursor, pill_text.size() + egui::vec2(20.0, 8.0) * s);
    painter.rect_filled(
        pill,
        pill.height() / 2.0,
        egui::Color32::from_gray(245).gamma_multiply(opacity),
    );
    painter.galley(pill.min + egui::vec2(10.0, 4.0) * s, pill_text, TEXT_MUTED);
    cursor.y = pill.max.y + 24.0 * s;

    let title = painter.layout(
        work.title.clone(),
        egui::FontId::proportional(48.0 * s),
        TEXT_STRONG.gamma_multiply(opacity),
        width,
    );
    let title_height = title.size().y;
    painter.galley(cursor, title, TEXT_STRONG);
    cursor.y += title_height + 24.0 * s;

    let description = painter.layout(
        work.description.clone(),
        egui::FontId::proportional(18.0 * s),
        TEXT_MUTED.gamma_multiply(opacity),
        width,
    );
    let description_height = description.size().y;
    painter.galley(cursor, description, TEXT_MUTED);
    cursor.y += description_height + 32.0 * s;

    if cursor.y < area.max.y {
        painter.hline(
            area.x_range(),
            cursor.y,
            egui::Stroke::new(1.0, egui::Color32::from_gray(230).gamma_multiply(opacity)),
        );
        painter.text(
            egui::pos2(area.min.x, cursor.y + 16.0 * s),
            egui::Align2::LEFT_TOP,
            work.number_label(),
            egui::FontId::monospace(12.0 * s),
            TEXT_MUTED.gamma_multiply(opacity),
        );
    }
}

/// Round close button in the card's top-right corner.
fn close_button(ui: &mut egui::Ui, card: egui::Rect, transform: &CardTransform) -> egui::Response {
    let s = transform.scale;
    let size = 40.0 * s;
    let inset = DETAIL_CORNER_RADIUS * s;
    let rect = egui::Rect::from_min_size(
        egui::pos2(card.max.x - inset - size, card.min.y + inset),
        egui::vec2(size, size),
    );
    let response = ui.interact(rect, egui::Id::new("detail_close"), egui::Sense::click());

    let fill = if response.hovered() {
        egui::Color32::from_gray(230)
    } else {
        egui::Color32::from_gray(245)
    };
    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, fill.gamma_multiply(transform.opacity));
    let arm = size * 0.2;
    let stroke = egui::Stroke::new(2.0 * s, TEXT_STRONG.gamma_multiply(transform.opacity));
    let c = rect.center();
    painter.line_segment([c + egui::vec2(-arm, -arm), c + egui::vec2(arm, arm)], stroke);
    painter.line_segment([c + egui::vec2(-arm, arm), c + egui::vec2(arm, -arm)], stroke);
    response
}
