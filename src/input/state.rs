//! Gesture phase state machine.
//!
//! A single explicit state replaces scattered "is a gesture active" booleans,
//! making impossible states unrepresentable and pinning the routing decision
//! for the whole gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> ObjectGesture   (gesture start over a tracked object)
//! Idle -> CanvasGesture   (gesture start over empty canvas)
//!
//! Any  -> Idle            (gesture end)
//! ```

use crate::types::ObjectId;

/// Scope of the currently active gesture.
///
/// Set once when a gesture starts and held until it ends; moves are never
/// re-routed mid-gesture, even if the origin object is deleted underneath
/// the gesture (its remaining deltas then no-op).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture in flight
    #[default]
    Idle,

    /// Gesture scoped to a single object
    ObjectGesture { object_id: ObjectId },

    /// Gesture scoped to the whole canvas
    CanvasGesture,
}

impl GesturePhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_object_gesture(&self) -> bool {
        matches!(self, Self::ObjectGesture { .. })
    }

    pub fn is_canvas_gesture(&self) -> bool {
        matches!(self, Self::CanvasGesture)
    }

    /// The object the active gesture is scoped to, if any.
    pub fn target_object(&self) -> Option<ObjectId> {
        match self {
            Self::ObjectGesture { object_id } => Some(*object_id),
            _ => None,
        }
    }

    /// Scope a new gesture to an object.
    pub fn start_object(&mut self, object_id: ObjectId) {
        *self = Self::ObjectGesture { object_id };
    }

    /// Scope a new gesture to the canvas.
    pub fn start_canvas(&mut self) {
        *self = Self::CanvasGesture;
    }

    /// Return to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
