//! pinchboard - gesture-to-transform engine for a 2D image canvas.
//!
//! Headless core of an interactive canvas editor: images live as tracked
//! objects on an infinite pannable/zoomable surface, gestures route to a
//! single object or the whole canvas, drag and pinch deltas compose into
//! persistent affine state, and a normalizer fits everything back into the
//! viewport. Rendering, file loading, and menus are the host's job, reached
//! through the [`RenderSink`] and [`ViewportMetrics`] seams.
//!
//! ```no_run
//! use pinchboard::{Engine, GestureEvent, ImageHandle, NoopSink};
//!
//! let mut engine = Engine::default();
//! let mut sink = NoopSink;
//! let id = engine.add_image(ImageHandle::new(640.0, 480.0), &mut sink);
//!
//! // A drag gesture starting on the image moves just that image.
//! engine.dispatch(GestureEvent::Start { x: 150.0, y: 150.0 }, &mut sink);
//! engine.dispatch(GestureEvent::Drag { dx: 12.0, dy: -3.0 }, &mut sink);
//! engine.dispatch(GestureEvent::End, &mut sink);
//! assert_eq!(engine.transform_of(id).unwrap().position.x, 112.0);
//! ```

pub mod constants;
mod engine;
mod error;
mod input;
pub mod perf;
mod render;
mod shared;
mod spatial_index;
mod store;
mod types;

pub use engine::{Engine, FixedViewport, ViewportMetrics};
pub use error::{EngineError, EngineResult};
pub use input::{CoordinateConverter, GestureEvent, GesturePhase};
pub use render::{NoopSink, RenderSink, canvas_instruction, object_instruction};
pub use shared::SharedEngine;
pub use spatial_index::{BoundsEntry, SpatialIndex};
pub use store::TransformStore;
pub use types::{
    CanvasGestureMode, CanvasInstruction, CanvasObject, CanvasTransform, Filter, ImageHandle,
    ObjectId, ObjectTransform, Point, RenderInstruction, ViewDefaults, point,
};
