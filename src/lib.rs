//! # Infinite Gallery
//!
//! A desktop gallery that shows a catalog of works as an endless, tiled grid.
//! The grid repeats in every direction, so panning never reaches an edge.
//!
//! ## Features
//! - Drag or scroll to pan the infinite canvas
//! - Slow idle roaming when nobody touches the gallery
//! - Click a card to open it in a detail view that grows out of its tile
//! - Adjustable gap, card scale and viewport zoom (press `S`)
//! - Hover magnification of cards
//!
//! The geometry, panning, roaming and transition logic lives in plain modules
//! without any UI dependency; the `ui` module drives them from egui.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod constants;
pub mod easing;
pub mod geometry;
pub mod pan;
pub mod roam;
pub mod transition;
mod types;
mod ui;

// Re-export public types and functions
pub use catalog::{Catalog, CatalogError};
pub use geometry::{tiles_for, GridGeometry};
pub use pan::PanController;
pub use roam::{roam_delta, RoamAnimator};
pub use transition::{DetailPhase, DetailTransition};
pub use types::*;
pub use ui::{GalleryApp, ImageLoadError};

/// Runs the gallery application.
///
/// This function opens the native window and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use infinite_gallery::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Infinite Gallery")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Infinite Gallery",
        options,
        Box::new(|cc| Ok(Box::new(GalleryApp::new(cc)))),
    )
}
