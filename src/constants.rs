//! Shared application-wide constants.
//! Centralizes tweakable values used across geometry, interaction and rendering.

// Grid layout
/// Number of columns in the base content grid.
pub const COLUMNS: usize = 4;
/// Width of one copy of the content grid, in content pixels.
pub const CONTENT_WIDTH: f32 = 1200.0;
/// Hovered cards are always this much larger than their base scale.
pub const HOVER_MULTIPLIER: f32 = 1.4;

// Settings ranges
/// Allowed range for the gap between cells (px).
pub const GAP_RANGE: std::ops::RangeInclusive<f32> = 0.0..=50.0;
/// Allowed range for the card base scale.
pub const BASE_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.1..=1.0;
/// Allowed range for the global viewport zoom.
pub const VIEWPORT_ZOOM_RANGE: std::ops::RangeInclusive<f32> = 0.5..=2.0;
/// Increment used by the zoom -/+ buttons.
pub const VIEWPORT_ZOOM_STEP: f32 = 0.1;

// Defaults
/// Default gap between cells (px).
pub const DEFAULT_GAP: f32 = 12.0;
/// Default card base scale.
pub const DEFAULT_BASE_SCALE: f32 = 0.45;
/// Default viewport zoom.
pub const DEFAULT_VIEWPORT_ZOOM: f32 = 1.0;
/// Pan offset the gallery starts at.
pub const INITIAL_POSITION: (f64, f64) = (-100.0, -100.0);

// Canvas interactions
/// Manhattan drag distance (px) above which a pointer release is not a click.
pub const CLICK_THRESHOLD: f64 = 5.0;
/// Pixels scrolled per wheel "line" on devices that report line deltas.
pub const WHEEL_LINE_HEIGHT: f32 = 40.0;

// Idle roaming
/// Seconds without interaction before roaming starts.
pub const ROAM_IDLE_SECONDS: f64 = 2.0;
/// Maximum roam displacement per frame on each axis (px).
pub const ROAM_SPEED: f64 = 0.8;
/// Time divisor for the roam path.
pub const ROAM_PERIOD: f64 = 3.0;
/// Relative angular frequency of the vertical roam axis.
pub const ROAM_Y_FREQUENCY: f64 = 0.7;

// Detail view transition
/// Scale the detail card starts from when growing out of a tile.
pub const DETAIL_START_SCALE: f32 = 0.2;
/// Delay before an opening card starts animating (s).
pub const OPEN_DELAY: f64 = 0.010;
/// Time a closing card stays on screen before the selection is dropped (s).
pub const CLOSE_DELAY: f64 = 0.400;
/// Duration of the card transform/opacity animation (s).
pub const CARD_TRANSITION_SECONDS: f64 = 0.700;
/// Duration of the hover magnification animation (s).
pub const HOVER_TRANSITION_SECONDS: f32 = 0.5;
/// Duration of the detail backdrop fade (s).
pub const BACKDROP_TRANSITION_SECONDS: f32 = 0.5;
/// Duration of the viewport zoom animation (s).
pub const ZOOM_TRANSITION_SECONDS: f32 = 0.3;

// Detail card layout
/// Maximum width of the detail card (px).
pub const DETAIL_MAX_WIDTH: f32 = 896.0;
/// Detail card height as a fraction of the viewport height.
pub const DETAIL_HEIGHT_FRACTION: f32 = 0.8;
/// Corner radius of the detail card.
pub const DETAIL_CORNER_RADIUS: f32 = 24.0;
/// Inner padding of the detail card columns.
pub const DETAIL_PADDING: f32 = 48.0;

// Images
/// Largest edge (px) a decoded image is downscaled to before upload.
pub const MAX_TEXTURE_EDGE: u32 = 1024;
/// Upper bound on a downloaded image body (bytes).
pub const MAX_IMAGE_BYTES: u64 = 16 * 1024 * 1024;
