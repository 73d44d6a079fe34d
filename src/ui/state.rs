//! Application state management structures.
//!
//! All mutable view state lives in one [`GalleryApp`] instance: the pan
//! offset, drag state, roam task, detail transition, settings and caches.
//! Only the layout settings survive a restart.

use super::images::ImageCache;
use crate::catalog::Catalog;
use crate::constants::INITIAL_POSITION;
use crate::geometry::GridGeometry;
use crate::pan::PanController;
use crate::roam::RoamAnimator;
use crate::transition::DetailTransition;
use crate::types::*;
use eframe::egui;
use serde::{Deserialize, Serialize};

/// A card under the pointer: which tile copy and which catalog index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRef {
    /// Key of the tile the card belongs to
    pub tile_key: String,
    /// Index into the catalog
    pub index: usize,
}

/// State related to canvas navigation and display.
pub struct CanvasState {
    /// Current pan offset of the tiled content
    pub position: Position,
    /// Screen rectangle the canvas was drawn into last frame
    pub viewport: egui::Rect,
    /// Viewport zoom as currently displayed (eases toward the configured zoom)
    pub zoom: f32,
    /// Card the pointer hovers, if any
    pub hovered: Option<CardRef>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            position: Position::new(INITIAL_POSITION.0, INITIAL_POSITION.1),
            viewport: egui::Rect::NOTHING,
            zoom: 1.0,
            hovered: None,
        }
    }
}

/// The main application structure.
///
/// This struct implements the `eframe::App` trait; every interaction handler
/// is a method on it.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryApp {
    /// User-adjustable layout settings (persisted)
    pub config: GridConfig,
    /// Cards shown on the canvas
    #[serde(skip)]
    pub catalog: Catalog,
    /// Pan offset and per-frame view data
    #[serde(skip)]
    pub canvas: CanvasState,
    /// Pointer drag state
    #[serde(skip)]
    pub pan: PanController,
    /// Idle roaming task
    #[serde(skip)]
    pub roam: RoamAnimator,
    /// Detail view state machine
    #[serde(skip)]
    pub detail: DetailTransition,
    /// Whether the settings panel is visible
    #[serde(skip)]
    pub show_settings: bool,
    /// Loaded card images
    #[serde(skip)]
    pub images: ImageCache,
}

impl Default for GalleryApp {
    fn default() -> Self {
        let catalog = Catalog::builtin().unwrap_or_else(|err| {
            log::error!("Bundled catalog is unusable: {err}");
            Catalog::default()
        });
        Self::with_catalog(catalog)
    }
}

impl GalleryApp {
    /// Creates an app showing `catalog` with default settings.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            config: GridConfig::default(),
            catalog,
            canvas: CanvasState::default(),
            pan: PanController::new(),
            roam: RoamAnimator::default(),
            detail: DetailTransition::new(),
            show_settings: false,
            images: ImageCache::default(),
        }
    }

    /// Layout of one grid copy for the current settings and catalog.
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(&self.config, self.catalog.len())
    }

    /// Serializes the persisted part of the app state to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Restores app state from JSON, clamping settings into their ranges.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut app: Self = serde_json::from_str(json)?;
        app.config = app.config.sanitized();
        Ok(app)
    }

    /// Stops the roam task and drops any pending detail transition.
    pub fn teardown(&mut self) {
        self.roam.cancel();
        self.detail.cancel();
        self.pan.pointer_up();
    }
}
