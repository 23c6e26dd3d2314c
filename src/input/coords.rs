//! Coordinate conversion utilities for canvas interactions.
//!
//! Gesture events reach the engine in canvas coordinates; these helpers give
//! hosts one place to convert screen-space pointer positions and deltas,
//! instead of duplicating the formulas around their input handling code.
//! Any chrome offset (toolbars, docks) is the host's concern and must be
//! subtracted before converting.

use crate::types::{CanvasTransform, Point, point};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen position to a canvas position
    #[inline]
    pub fn screen_to_canvas(screen_pos: Point, canvas: &CanvasTransform) -> Point {
        point(
            (screen_pos.x - canvas.offset.x) / canvas.scale,
            (screen_pos.y - canvas.offset.y) / canvas.scale,
        )
    }

    /// Convert a canvas position to a screen position
    #[inline]
    pub fn canvas_to_screen(canvas_pos: Point, canvas: &CanvasTransform) -> Point {
        point(
            canvas_pos.x * canvas.scale + canvas.offset.x,
            canvas_pos.y * canvas.scale + canvas.offset.y,
        )
    }

    /// Convert a delta from screen to canvas (for drag operations)
    #[inline]
    pub fn delta_screen_to_canvas(dx: f32, dy: f32, zoom: f32) -> (f32, f32) {
        (dx / zoom, dy / zoom)
    }
}
