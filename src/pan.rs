//! Pointer-driven panning of the canvas.
//!
//! Converts pointer down/move/up sequences and wheel deltas into updates of
//! the pan offset, and keeps the accumulated drag distance used to tell a
//! click apart from the end of a drag.

use crate::constants::CLICK_THRESHOLD;
use crate::types::Position;

/// Drag state of the canvas.
#[derive(Debug, Clone, Default)]
pub struct PanController {
    dragging: bool,
    /// Pointer position minus pan offset at the moment the drag started
    anchor: Position,
    /// Manhattan length of the pointer path since the last pointer-down
    drag_distance: f64,
}

impl PanController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Distance travelled by the pointer since the last pointer-down.
    pub fn drag_distance(&self) -> f64 {
        self.drag_distance
    }

    /// Whether the current (or last) gesture is short enough to count as a click.
    pub fn is_click(&self) -> bool {
        self.drag_distance <= CLICK_THRESHOLD
    }

    /// Starts a drag at `pointer` with the canvas currently at `position`.
    pub fn pointer_down(&mut self, pointer: Position, position: Position) {
        self.dragging = true;
        self.anchor = pointer - position;
        self.drag_distance = 0.0;
    }

    /// Moves the canvas with the pointer while dragging.
    ///
    /// Returns `true` if `position` was updated.
    pub fn pointer_move(&mut self, pointer: Position, position: &mut Position) -> bool {
        if !self.dragging {
            return false;
        }
        let step = pointer - (self.anchor + *position);
        self.drag_distance += step.manhattan_length();
        *position = pointer - self.anchor;
        true
    }

    /// Ends the drag. Also used when the pointer leaves the surface.
    ///
    /// Returns `true` if a drag was in progress.
    pub fn pointer_up(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    /// Applies a wheel/trackpad delta directly to the pan offset.
    pub fn wheel(&mut self, delta: Position, position: &mut Position) {
        *position += delta;
    }
}
