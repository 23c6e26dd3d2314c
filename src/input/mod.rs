//! Gesture input handling.
//!
//! This module is organized into several submodules:
//! - `events` - The gesture event vocabulary delivered by the host
//! - `state` - Explicit gesture phase state machine
//! - `coords` - Screen/canvas coordinate conversion helpers
//! - `router` - Routing a gesture start to an object or the canvas
//! - `object` - Object-scoped drag and pinch application
//! - `canvas` - Canvas-scoped drag and pinch application (both modes)

mod canvas;
mod coords;
mod events;
mod object;
mod router;
mod state;

pub use coords::CoordinateConverter;
pub use events::GestureEvent;
pub use state::GesturePhase;
