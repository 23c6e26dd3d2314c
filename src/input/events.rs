//! Gesture event vocabulary.
//!
//! The host's gesture recognizer (touch, trackpad, pointer emulation) is an
//! external collaborator; it delivers one `Start`, zero or more `Drag`/
//! `Pinch` moves, and one `End` per gesture, in emission order. The engine
//! consumes these as explicit commands through [`crate::Engine::dispatch`]
//! instead of wiring callbacks into an event-loop runtime, which keeps the
//! strict per-stream ordering guarantee independent of any runtime.

/// One gesture event, in canvas-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A gesture began at the given origin point. Routing to an object or
    /// the canvas happens here, once, and holds until `End`.
    Start { x: f32, y: f32 },

    /// Incremental drag translation since the previous event.
    Drag { dx: f32, dy: f32 },

    /// Incremental pinch as a fractional scale delta; the effective factor
    /// is `1.0 + ds`.
    Pinch { ds: f32 },

    /// The gesture ended. Applied deltas stay; nothing rolls back.
    End,
}
