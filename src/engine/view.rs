//! Fit-to-viewport normalization.
//!
//! One-shot recompute of the canvas transform so the union bounding box of
//! all tracked objects fills the available viewport, centered, aspect ratio
//! preserved. Not a continuous constraint: subsequent gestures are free to
//! violate the fit again.

use crate::constants::{MAX_FIT_SCALE, MIN_OBJECT_SCALE};
use crate::engine::Engine;
use crate::error::EngineError;
use crate::render::{RenderSink, canvas_instruction};
use crate::types::point;

/// Supplies the currently available viewport size, in pixels, with any
/// reserved chrome (control bars, docks) already subtracted.
///
/// A trait rather than stored dimensions so fit always reads fresh values
/// and the chrome reservation stays the host's concern.
pub trait ViewportMetrics {
    fn available_size(&self) -> (f32, f32);
}

/// Constant viewport size; convenient for hosts with a fixed window and for
/// tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport {
    pub width: f32,
    pub height: f32,
}

impl ViewportMetrics for FixedViewport {
    fn available_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl Engine {
    /// Union bounding box of all tracked objects as
    /// `(min_x, min_y, max_x, max_y)`, or `None` with no objects.
    pub fn content_bounds(&self) -> Option<(f32, f32, f32, f32)> {
        let mut bounds: Option<(f32, f32, f32, f32)> = None;
        for object in self.store.iter() {
            let (min_x, min_y, max_x, max_y) = object.bounds();
            bounds = Some(match bounds {
                None => (min_x, min_y, max_x, max_y),
                Some((bx0, by0, bx1, by1)) => (
                    bx0.min(min_x),
                    by0.min(min_y),
                    bx1.max(max_x),
                    by1.max(max_y),
                ),
            });
        }
        bounds
    }

    /// Recenter and rescale the canvas so all content fits the viewport.
    ///
    /// Shrinks to fit or leaves content as-is - never zooms in past 1.0.
    /// Returns `true` if a transform was applied; no objects or a zero-area
    /// union box degrade to a no-op. Idempotent on a static scene: the
    /// result depends only on object state and viewport size, not on the
    /// current canvas transform.
    pub fn fit_to_viewport(&mut self, metrics: &dyn ViewportMetrics, sink: &mut dyn RenderSink) -> bool {
        let Some((min_x, min_y, max_x, max_y)) = self.content_bounds() else {
            return false;
        };

        let content_width = max_x - min_x;
        let content_height = max_y - min_y;
        if content_width <= 0.0 || content_height <= 0.0 {
            tracing::debug!(
                error = %EngineError::DegenerateContent,
                "fit-to-viewport skipped"
            );
            return false;
        }

        let (view_width, view_height) = metrics.available_size();
        let target_scale = (view_width / content_width)
            .min(view_height / content_height)
            .min(MAX_FIT_SCALE)
            .max(MIN_OBJECT_SCALE);

        self.canvas.scale = target_scale;
        self.canvas.offset = point(
            (view_width - content_width * target_scale) / 2.0 - min_x * target_scale,
            (view_height - content_height * target_scale) / 2.0 - min_y * target_scale,
        );

        tracing::debug!(
            scale = target_scale,
            offset_x = self.canvas.offset.x,
            offset_y = self.canvas.offset.y,
            "fit-to-viewport applied"
        );
        sink.apply_canvas(canvas_instruction(&self.canvas));
        true
    }
}
