//! Gesture routing - scoping a gesture to an object or the whole canvas.
//!
//! ## Performance Notes
//!
//! Gesture moves arrive very frequently (60+ per second on touch hardware).
//! Key optimizations:
//! - O(log n) hit testing via the R-tree spatial index at gesture start only
//! - Moves dispatch on the already-decided phase, no per-move hit test
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::engine::Engine;
use crate::input::{GestureEvent, GesturePhase};
use crate::profile_scope;
use crate::render::RenderSink;
use crate::types::{ObjectId, ObjectTransform};
use std::collections::HashSet;

impl Engine {
    /// Consume one gesture event.
    ///
    /// `Start` routes the gesture; `Drag`/`Pinch` apply to whatever the
    /// start decided; `End` returns to idle. Moves without a preceding start
    /// are dropped. Every state mutation re-renders through `sink` before
    /// this returns.
    pub fn dispatch(&mut self, event: GestureEvent, sink: &mut dyn RenderSink) {
        profile_scope!("dispatch");

        match event {
            GestureEvent::Start { x, y } => self.handle_gesture_start(x, y),
            GestureEvent::Drag { dx, dy } => match self.phase {
                GesturePhase::ObjectGesture { object_id } => {
                    self.object_drag(object_id, dx, dy, sink);
                }
                GesturePhase::CanvasGesture => self.canvas_drag(dx, dy, sink),
                GesturePhase::Idle => {}
            },
            GestureEvent::Pinch { ds } => match self.phase {
                GesturePhase::ObjectGesture { object_id } => {
                    self.object_pinch(object_id, ds, sink);
                }
                GesturePhase::CanvasGesture => self.canvas_pinch(ds, sink),
                GesturePhase::Idle => {}
            },
            GestureEvent::End => self.phase.reset(),
        }
    }

    /// Decide the scope of a new gesture from its origin point. Binary and
    /// mutually exclusive: over an object routes to that object, anywhere
    /// else routes to the canvas.
    fn handle_gesture_start(&mut self, x: f32, y: f32) {
        match self.hit_test_topmost(x, y) {
            Some(object_id) => {
                tracing::debug!(object_id, x, y, "gesture routed to object");
                self.phase.start_object(object_id);
            }
            None => {
                tracing::debug!(x, y, "gesture routed to canvas");
                self.phase.start_canvas();
            }
        }
    }

    /// Topmost object whose rendered bounds contain the given canvas-space
    /// point, resolving overlaps by reverse insertion order.
    pub fn hit_test_topmost(&self, x: f32, y: f32) -> Option<ObjectId> {
        profile_scope!("hit_test");

        let candidates: HashSet<ObjectId> = self.index.query_point(x, y).into_iter().collect();
        if candidates.is_empty() {
            return None;
        }
        self.store.ids_top_down().find(|id| candidates.contains(id))
    }

    /// Resolve a hold gesture: surface the hit object's identity and current
    /// transform for the host's context-action menu. Does not mutate
    /// anything; the menu calls back through [`Engine::flip_one`] and
    /// [`Engine::delete_one`] only.
    pub fn handle_hold(&self, x: f32, y: f32) -> Option<(ObjectId, ObjectTransform)> {
        let object_id = self.hit_test_topmost(x, y)?;
        let object = self.store.get(object_id).ok()?;
        Some((object_id, object.transform))
    }
}
