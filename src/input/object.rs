//! Object-scoped gesture application - drag translation and pinch scaling.
//!
//! Drag and pinch may interleave on the same object within one gesture;
//! each kind only touches its own transform field, so any interleaving
//! composes. Every delta re-renders the object immediately - smooth
//! manipulation feedback depends on it - and refreshes its spatial entry so
//! the next gesture start hit-tests against fresh bounds.

use crate::constants::MIN_OBJECT_SCALE;
use crate::engine::Engine;
use crate::error::EngineError;
use crate::render::{RenderSink, object_instruction};
use crate::types::ObjectId;

impl Engine {
    /// Apply one drag increment to an object. Objects may be dragged
    /// off-canvas; there is no bounds clamp.
    pub(crate) fn object_drag(&mut self, id: ObjectId, dx: f32, dy: f32, sink: &mut dyn RenderSink) {
        let Ok(object) = self.store.get_mut(id) else {
            // Deleted mid-gesture; remaining deltas drop silently.
            tracing::debug!(id, "drag delta for untracked object dropped");
            return;
        };
        object.transform.position.translate(dx, dy);

        let instruction = object_instruction(&object.transform);
        let snapshot = *object;
        self.index.update(&snapshot);
        sink.apply_object(id, instruction);
    }

    /// Apply one pinch increment to an object: `scale *= 1 + ds`.
    ///
    /// A single object's scale has no range clamp (unlike canvas zoom), only
    /// the epsilon floor that keeps it positive.
    pub(crate) fn object_pinch(&mut self, id: ObjectId, ds: f32, sink: &mut dyn RenderSink) {
        let Ok(object) = self.store.get_mut(id) else {
            tracing::debug!(id, "pinch delta for untracked object dropped");
            return;
        };
        let raw = object.transform.scale * (1.0 + ds);
        if raw < MIN_OBJECT_SCALE {
            tracing::debug!(id, error = %EngineError::InvalidScale { value: raw }, "pinch floored");
        }
        object.transform.scale = raw.max(MIN_OBJECT_SCALE);

        let instruction = object_instruction(&object.transform);
        let snapshot = *object;
        self.index.update(&snapshot);
        sink.apply_object(id, instruction);
    }
}
