//! Core data types and structures for the gallery.
//!
//! This module defines the plain data shared by the geometry, interaction and
//! transition logic. None of it depends on the UI toolkit.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// Identifier of a catalog entry.
pub type WorkId = u32;

/// A 2D point or offset in content pixels.
///
/// Used both for the unbounded pan offset of the canvas and for pointer
/// positions reported by the rendering backend. Components are `f64` so a
/// canvas panned millions of pixels away still moves by sub-pixel steps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub y: f64,
}

impl Position {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a position from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute components.
    pub fn manhattan_length(self) -> f64 {
        self.x.abs() + self.y.abs()
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Bounds {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Position {
        Position::new(
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }

    /// Whether `point` lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Position) -> bool {
        let (x, y) = (f64::from(self.x), f64::from(self.y));
        point.x >= x
            && point.x <= x + f64::from(self.width)
            && point.y >= y
            && point.y <= y + f64::from(self.height)
    }
}

/// User-adjustable layout settings.
///
/// Only mutated through the clamping setters, which mirror the ranges exposed
/// by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Gap between cells and between tiled copies of the grid (px)
    pub gap: f32,
    /// Fraction of its cell a card image occupies when not hovered
    pub base_scale: f32,
    /// Global zoom applied to the whole canvas around the viewport center
    pub viewport_zoom: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            base_scale: DEFAULT_BASE_SCALE,
            viewport_zoom: DEFAULT_VIEWPORT_ZOOM,
        }
    }
}

impl GridConfig {
    /// Sets the cell gap, clamped to [`GAP_RANGE`].
    pub fn set_gap(&mut self, gap: f32) {
        self.gap = clamp_to(gap, &GAP_RANGE, DEFAULT_GAP);
    }

    /// Sets the card base scale, clamped to [`BASE_SCALE_RANGE`].
    pub fn set_base_scale(&mut self, scale: f32) {
        self.base_scale = clamp_to(scale, &BASE_SCALE_RANGE, DEFAULT_BASE_SCALE);
    }

    /// Sets the viewport zoom, clamped to [`VIEWPORT_ZOOM_RANGE`].
    pub fn set_viewport_zoom(&mut self, zoom: f32) {
        self.viewport_zoom = clamp_to(zoom, &VIEWPORT_ZOOM_RANGE, DEFAULT_VIEWPORT_ZOOM);
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.set_viewport_zoom(self.viewport_zoom + VIEWPORT_ZOOM_STEP);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.set_viewport_zoom(self.viewport_zoom - VIEWPORT_ZOOM_STEP);
    }

    /// Scale a card is drawn at while the pointer hovers it.
    pub fn hover_scale(&self) -> f32 {
        self.base_scale * HOVER_MULTIPLIER
    }

    /// Returns a copy with every field clamped into its allowed range.
    ///
    /// Used on values restored from storage, which bypass the setters.
    pub fn sanitized(self) -> Self {
        let mut config = Self::default();
        config.set_gap(self.gap);
        config.set_base_scale(self.base_scale);
        config.set_viewport_zoom(self.viewport_zoom);
        config
    }
}

fn clamp_to(value: f32, range: &std::ops::RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}

/// One artifact card of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique identifier, also shown as the card number
    pub id: WorkId,
    /// Display title
    pub title: String,
    /// Category shown as a pill in the detail view
    pub category: String,
    /// Long-form description shown in the detail view
    pub description: String,
    /// Image URL; cards without one render as a placeholder
    #[serde(default)]
    pub image: Option<String>,
    /// Accent colour as `#rrggbb`, used behind missing images
    pub color: String,
}

impl WorkItem {
    /// Card number label as shown in the detail view, e.g. `NO. 07`.
    pub fn number_label(&self) -> String {
        format!("NO. {:02}", self.id)
    }
}

/// Placement of one repeated copy of the content grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TileCoordinate {
    /// Stable key of the form `"ix-iy"`
    pub key: String,
    /// Horizontal grid offset in `-1..=1`
    pub ix: i32,
    /// Vertical grid offset in `-1..=1`
    pub iy: i32,
    /// Left edge of the tile in canvas coordinates
    pub x: f64,
    /// Top edge of the tile in canvas coordinates
    pub y: f64,
}

impl TileCoordinate {
    /// Top-left corner of the tile.
    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Start transform of the detail card, relative to the viewport center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialStyles {
    /// Horizontal offset of the clicked tile's center from the viewport center
    pub x: f32,
    /// Vertical offset of the clicked tile's center from the viewport center
    pub y: f32,
    /// Starting scale of the card
    pub scale: f32,
}

/// The work shown in the detail view and where its transition starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedWork {
    /// The selected catalog entry
    pub data: WorkItem,
    /// Start transform captured when the card was clicked
    pub initial_styles: InitialStyles,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp_into_settings_ranges() {
        let mut config = GridConfig::default();
        config.set_gap(80.0);
        config.set_base_scale(0.0);
        config.set_viewport_zoom(3.0);
        assert_eq!(config.gap, 50.0);
        assert_eq!(config.base_scale, 0.1);
        assert_eq!(config.viewport_zoom, 2.0);
    }

    #[test]
    fn zoom_buttons_stop_at_bounds() {
        let mut config = GridConfig::default();
        for _ in 0..20 {
            config.zoom_out();
        }
        assert_eq!(config.viewport_zoom, 0.5);
        for _ in 0..30 {
            config.zoom_in();
        }
        assert_eq!(config.viewport_zoom, 2.0);
    }

    #[test]
    fn hover_scale_follows_base_scale() {
        let mut config = GridConfig::default();
        config.set_base_scale(0.5);
        assert_eq!(config.hover_scale(), 0.5 * HOVER_MULTIPLIER);
    }

    #[test]
    fn sanitized_repairs_out_of_range_and_nan_values() {
        let config = GridConfig {
            gap: -4.0,
            base_scale: f32::NAN,
            viewport_zoom: 10.0,
        }
        .sanitized();
        assert_eq!(config.gap, 0.0);
        assert_eq!(config.base_scale, DEFAULT_BASE_SCALE);
        assert_eq!(config.viewport_zoom, 2.0);
    }

    #[test]
    fn number_label_is_zero_padded() {
        let work = WorkItem {
            id: 7,
            title: "t".into(),
            category: "c".into(),
            description: "d".into(),
            image: None,
            color: "#ffffff".into(),
        };
        assert_eq!(work.number_label(), "NO. 07");
    }
}
