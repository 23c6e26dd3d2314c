//! Canvas-scoped gesture application.
//!
//! Runs only when routing decided the gesture started over empty canvas.
//! The engine's [`CanvasGestureMode`] - fixed at construction - selects one
//! of two semantics:
//!
//! - `CanvasTransform`: mutate the single shared canvas offset/zoom and emit
//!   one canvas instruction per update.
//! - `Broadcast`: sweep the delta into every tracked object's own transform
//!   and re-render each; no canvas-level transform is touched.
//!
//! Zoom is clamped per increment, not once at gesture end: with deltas
//! oscillating across a bound the two produce different results, and the
//! per-increment behavior is the one users feel.

use crate::constants::{MAX_CANVAS_ZOOM, MIN_CANVAS_ZOOM};
use crate::engine::Engine;
use crate::render::{RenderSink, canvas_instruction, object_instruction};
use crate::types::CanvasGestureMode;

impl Engine {
    /// Apply one canvas-scoped drag increment.
    pub(crate) fn canvas_drag(&mut self, dx: f32, dy: f32, sink: &mut dyn RenderSink) {
        match self.mode {
            CanvasGestureMode::CanvasTransform => {
                self.canvas.offset.translate(dx, dy);
                sink.apply_canvas(canvas_instruction(&self.canvas));
            }
            CanvasGestureMode::Broadcast => {
                for id in self.store.ids() {
                    if let Ok(object) = self.store.get_mut(id) {
                        object.transform.position.translate(dx, dy);
                        sink.apply_object(id, object_instruction(&object.transform));
                    }
                }
                self.index.rebuild(self.store.iter());
            }
        }
    }

    /// Apply one canvas-scoped pinch increment, clamping into the canvas
    /// zoom range. In broadcast mode the clamp applies to each object's own
    /// scale.
    pub(crate) fn canvas_pinch(&mut self, ds: f32, sink: &mut dyn RenderSink) {
        let factor = 1.0 + ds;
        match self.mode {
            CanvasGestureMode::CanvasTransform => {
                self.canvas.scale =
                    (self.canvas.scale * factor).clamp(MIN_CANVAS_ZOOM, MAX_CANVAS_ZOOM);
                sink.apply_canvas(canvas_instruction(&self.canvas));
            }
            CanvasGestureMode::Broadcast => {
                for id in self.store.ids() {
                    if let Ok(object) = self.store.get_mut(id) {
                        object.transform.scale = (object.transform.scale * factor)
                            .clamp(MIN_CANVAS_ZOOM, MAX_CANVAS_ZOOM);
                        sink.apply_object(id, object_instruction(&object.transform));
                    }
                }
                self.index.rebuild(self.store.iter());
            }
        }
    }
}
