//! Canvas interaction and navigation functionality.
//!
//! This module turns egui input events into calls on the pan controller,
//! roam animator and detail transition, and handles coordinate
//! transformations between screen space and canvas space.

use super::state::{CardRef, GalleryApp};
use crate::constants::*;
use crate::types::*;
use eframe::egui;

/// Converts an egui point into a core position.
pub fn to_position(pos: egui::Pos2) -> Position {
    Position::new(f64::from(pos.x), f64::from(pos.y))
}

impl GalleryApp {
    /// Converts canvas coordinates (tile space) to screen coordinates.
    ///
    /// The tile layer is anchored at the viewport's top-left corner and scaled
    /// around the viewport center by the displayed zoom.
    pub fn canvas_to_screen(&self, point: Position) -> egui::Pos2 {
        let viewport = self.canvas.viewport;
        let center = viewport.center();
        let unzoomed = viewport.min + egui::vec2(point.x as f32, point.y as f32);
        center + (unzoomed - center) * self.canvas.zoom
    }

    /// Converts screen coordinates to canvas coordinates.
    pub fn screen_to_canvas(&self, pos: egui::Pos2) -> Position {
        let viewport = self.canvas.viewport;
        let center = viewport.center();
        let unzoomed = center + (pos - center) / self.canvas.zoom;
        to_position(unzoomed - viewport.min.to_vec2())
    }

    /// Finds the card under a screen position.
    pub fn card_at(&self, pos: egui::Pos2) -> Option<CardRef> {
        let geometry = self.geometry();
        let tiles = geometry.tiles(self.canvas.position);
        geometry
            .item_at(&tiles, self.screen_to_canvas(pos))
            .map(|(tile, index)| CardRef {
                tile_key: tiles[tile].key.clone(),
                index,
            })
    }

    /// Screen rectangle of a card's cell.
    pub fn card_screen_rect(&self, card: &CardRef) -> Option<egui::Rect> {
        let geometry = self.geometry();
        let tiles = geometry.tiles(self.canvas.position);
        let tile = tiles.iter().find(|t| t.key == card.tile_key)?;
        let cell = geometry.cell_bounds(card.index);
        let corner = |x: f32, y: f32| tile.origin() + Position::new(f64::from(x), f64::from(y));
        let min = self.canvas_to_screen(corner(cell.x, cell.y));
        let max = self.canvas_to_screen(corner(cell.x + cell.width, cell.y + cell.height));
        Some(egui::Rect::from_min_max(min, max))
    }

    /// Feeds this frame's input events to the canvas controllers.
    ///
    /// Pointer presses over other layers (settings, detail view) do not start
    /// a drag, but every event still counts as activity for the roam timer.
    pub fn handle_canvas_input(&mut self, ui: &egui::Ui, now: f64) {
        let canvas_layer = ui.layer_id();
        let events = ui.input(|i| i.events.clone());
        let page_height = self.canvas.viewport.height();

        for event in &events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let on_canvas = ui
                        .ctx()
                        .layer_id_at(*pos)
                        .is_none_or(|layer| layer == canvas_layer);
                    if *pressed {
                        self.on_pointer_down(*pos, on_canvas, now);
                    } else {
                        self.on_pointer_up(*pos, on_canvas, now);
                    }
                }
                egui::Event::PointerMoved(pos) => self.on_pointer_move(*pos, now),
                egui::Event::PointerGone => self.on_pointer_leave(),
                egui::Event::MouseWheel { unit, delta, .. } => {
                    let scale = match unit {
                        egui::MouseWheelUnit::Point => 1.0,
                        egui::MouseWheelUnit::Line => WHEEL_LINE_HEIGHT,
                        egui::MouseWheelUnit::Page => page_height,
                    };
                    // egui reports how the content should move; the gallery
                    // adds the scroll amount itself, as browsers report it.
                    let scroll = -*delta * scale;
                    self.on_wheel(Position::new(f64::from(scroll.x), f64::from(scroll.y)), now);
                }
                _ => {}
            }
        }
    }

    /// Pointer pressed at `pos`. `on_canvas` is false over excluded elements.
    pub fn on_pointer_down(&mut self, pos: egui::Pos2, on_canvas: bool, now: f64) {
        self.roam.note_interaction(now);
        if !on_canvas || self.detail.is_showing() {
            return;
        }
        self.pan.pointer_down(to_position(pos), self.canvas.position);
    }

    /// Pointer moved to `pos`; pans while dragging.
    pub fn on_pointer_move(&mut self, pos: egui::Pos2, now: f64) {
        self.roam.note_interaction(now);
        self.pan.pointer_move(to_position(pos), &mut self.canvas.position);
    }

    /// Pointer released at `pos`; opens the card under it if the gesture was a
    /// click that started and ended on the canvas.
    pub fn on_pointer_up(&mut self, pos: egui::Pos2, on_canvas: bool, now: f64) {
        let was_dragging = self.pan.pointer_up();
        if !was_dragging || !on_canvas || !self.pan.is_click() {
            if was_dragging {
                log::trace!("Drag of {:.1}px ended", self.pan.drag_distance());
            }
            return;
        }
        if let Some(card) = self.card_at(pos) {
            self.open_card(&card, now);
        }
    }

    /// Pointer left the surface; ends any drag.
    pub fn on_pointer_leave(&mut self) {
        self.pan.pointer_up();
    }

    /// Wheel or trackpad scroll by `delta` (scroll amount, not content motion).
    pub fn on_wheel(&mut self, delta: Position, now: f64) {
        self.roam.note_interaction(now);
        if self.detail.is_showing() {
            return;
        }
        self.pan.wheel(delta, &mut self.canvas.position);
    }

    /// Opens the detail view for `card`, growing from its on-screen cell.
    pub fn open_card(&mut self, card: &CardRef, now: f64) {
        let (Some(work), Some(rect)) = (self.catalog.get(card.index), self.card_screen_rect(card))
        else {
            return;
        };
        let work = work.clone();
        let origin = Bounds::new(rect.min.x, rect.min.y, rect.width(), rect.height());
        let viewport_center = to_position(self.canvas.viewport.center());
        self.detail.open_with(work, origin, viewport_center, now);
    }

    /// Advances the idle roam by one frame.
    pub fn step_roam(&mut self, now: f64) {
        let blocked = self.pan.is_dragging() || self.detail.is_showing() || self.show_settings;
        if let Some(delta) = self.roam.step(now, blocked) {
            self.canvas.position += delta;
        }
    }

    /// Updates which card the pointer hovers.
    pub fn update_hover(&mut self, response: &egui::Response) {
        self.canvas.hovered = if response.hovered() {
            response.hover_pos().and_then(|pos| self.card_at(pos))
        } else {
            None
        };
    }
}
