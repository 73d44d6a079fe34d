//! Grid layout and tile virtualization.
//!
//! A single finite grid of cards is laid out once; the canvas repeats it in a
//! 3×3 neighbourhood of tiles around the current pan offset so that the plane
//! looks endless.

use crate::constants::{COLUMNS, CONTENT_WIDTH};
use crate::types::*;

/// Tile offsets used on each axis of the 3×3 neighbourhood.
const TILE_RANGE: [i32; 3] = [-1, 0, 1];

/// Layout of one copy of the content grid, derived from the config and the
/// number of catalog entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Number of columns (fixed)
    pub columns: usize,
    /// Number of rows needed for all items
    pub rows: usize,
    /// Gap between cells
    pub gap: f32,
    /// Edge length of one square cell
    pub item_size: f32,
    /// Width of one grid copy
    pub content_width: f32,
    /// Height of one grid copy
    pub content_height: f32,
    /// Horizontal repeat distance of the tiling
    pub unit_width: f32,
    /// Vertical repeat distance of the tiling
    pub unit_height: f32,
    item_count: usize,
}

impl GridGeometry {
    /// Computes the layout for `item_count` cards under `config`.
    pub fn new(config: &GridConfig, item_count: usize) -> Self {
        let columns = COLUMNS;
        let gap = config.gap;
        let content_width = CONTENT_WIDTH;
        let item_size = (content_width - (columns as f32 - 1.0) * gap) / columns as f32;
        let rows = item_count.div_ceil(columns);
        let content_height = if rows == 0 {
            0.0
        } else {
            rows as f32 * item_size + (rows as f32 - 1.0) * gap
        };

        Self {
            columns,
            rows,
            gap,
            item_size,
            content_width,
            content_height,
            unit_width: content_width + gap,
            unit_height: content_height + gap,
            item_count,
        }
    }

    /// Number of cards laid out in the grid.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The nine tiles around `position`.
    pub fn tiles(&self, position: Position) -> [TileCoordinate; 9] {
        tiles_for(position, self.unit_width, self.unit_height)
    }

    /// Rectangle of the cell at `index`, relative to its tile's origin.
    pub fn cell_bounds(&self, index: usize) -> Bounds {
        let col = index % self.columns;
        let row = index / self.columns;
        let stride = self.item_size + self.gap;
        Bounds::new(
            col as f32 * stride,
            row as f32 * stride,
            self.item_size,
            self.item_size,
        )
    }

    /// Finds the cell under `point`, given in canvas coordinates.
    ///
    /// Returns the tile and the index of the item whose cell contains the
    /// point. Points on a gap or on an empty trailing cell hit nothing.
    pub fn item_at(&self, tiles: &[TileCoordinate], point: Position) -> Option<(usize, usize)> {
        let stride = self.item_size + self.gap;
        if stride <= 0.0 || self.item_count == 0 {
            return None;
        }
        let stride = f64::from(stride);

        tiles.iter().enumerate().find_map(|(tile_index, tile)| {
            let local = point - tile.origin();
            if local.x < 0.0
                || local.y < 0.0
                || local.x > f64::from(self.content_width)
                || local.y > f64::from(self.content_height)
            {
                return None;
            }
            let col = ((local.x / stride).floor() as usize).min(self.columns - 1);
            let row = ((local.y / stride).floor() as usize).min(self.rows.saturating_sub(1));
            let index = row * self.columns + col;
            if index >= self.item_count {
                return None;
            }
            self.cell_bounds(index)
                .contains(local)
                .then_some((tile_index, index))
        })
    }
}

/// Signed remainder of `value` by `unit`; zero when the unit is degenerate.
fn wrap_offset(value: f64, unit: f32) -> f64 {
    let unit = f64::from(unit);
    if unit > 0.0 {
        value % unit
    } else {
        0.0
    }
}

/// Computes the 3×3 tile neighbourhood for the given pan offset.
///
/// The offset on each axis is reduced modulo the unit size, so the result
/// stays within one unit of the origin however far the canvas has been panned.
pub fn tiles_for(position: Position, unit_width: f32, unit_height: f32) -> [TileCoordinate; 9] {
    let offset_x = wrap_offset(position.x, unit_width);
    let offset_y = wrap_offset(position.y, unit_height);

    std::array::from_fn(|i| {
        let ix = TILE_RANGE[i / 3];
        let iy = TILE_RANGE[i % 3];
        TileCoordinate {
            key: format!("{ix}-{iy}"),
            ix,
            iy,
            x: offset_x + f64::from(ix) * f64::from(unit_width),
            y: offset_y + f64::from(iy) * f64::from(unit_height),
        }
    })
}
