//! Core types for the pinchboard canvas engine.
//!
//! This module defines the fundamental data structures used throughout the
//! engine: per-object and canvas-level transforms, the image ingestion
//! handle, rendering instructions, and engine configuration.

use crate::constants::{DEFAULT_CANVAS_ZOOM, DEFAULT_OBJECT_SCALE, SPAWN_POSITION};
use serde::{Deserialize, Serialize};

/// Identifier of a tracked canvas object.
///
/// Ids are allocated sequentially by the store and are never reused within a
/// single engine's lifetime, so a stale id from a deleted object can never
/// alias a live one.
pub type ObjectId = u64;

// ============================================================================
// Geometry
// ============================================================================

/// A 2D point or translation in canvas space, in pixels, origin top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by a delta in place.
    #[inline]
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

/// Construct a [`Point`].
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

// ============================================================================
// Transforms
// ============================================================================

/// Geometric and visual state of one tracked object.
///
/// `scale` stays positive at all times; mirroring is expressed through the
/// `flipped` flag and only materializes as a negative X scale in the render
/// instruction, never in the stored state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectTransform {
    /// Canvas-space translation of the object's top-left corner
    pub position: Point,
    /// Uniform scale magnitude, applied to both axes before mirroring
    pub scale: f32,
    /// Mirror the object across its vertical axis
    pub flipped: bool,
    /// Render through a grayscale filter; independent of geometry
    pub grayscale: bool,
}

impl ObjectTransform {
    /// Transform a freshly ingested image starts with, seeded from the
    /// current view defaults.
    pub fn spawned(defaults: ViewDefaults) -> Self {
        Self {
            position: point(SPAWN_POSITION.0, SPAWN_POSITION.1),
            scale: DEFAULT_OBJECT_SCALE,
            flipped: defaults.flipped,
            grayscale: defaults.grayscale,
        }
    }
}

/// Shared transform of the whole canvas surface.
///
/// Mutated only by canvas-scoped gestures (in canvas-transform mode) and the
/// fit-to-viewport normalizer; adding or removing objects never resets it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasTransform {
    /// Translation applied to the whole surface
    pub offset: Point,
    /// Uniform zoom, always within `[MIN_CANVAS_ZOOM, MAX_CANVAS_ZOOM]`
    pub scale: f32,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            offset: Point::ZERO,
            scale: DEFAULT_CANVAS_ZOOM,
        }
    }
}

// ============================================================================
// Image Ingestion
// ============================================================================

/// Intrinsic dimensions of a decoded image, supplied by the host's image
/// ingestion layer. The engine never decodes images itself.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageHandle {
    pub natural_width: f32,
    pub natural_height: f32,
}

impl ImageHandle {
    pub fn new(natural_width: f32, natural_height: f32) -> Self {
        Self {
            natural_width,
            natural_height,
        }
    }
}

/// One tracked image object: stable identity, transform, and intrinsic size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasObject {
    pub id: ObjectId,
    pub transform: ObjectTransform,
    pub image: ImageHandle,
}

impl CanvasObject {
    /// Axis-aligned rendered bounds in canvas space as
    /// `(min_x, min_y, max_x, max_y)`.
    ///
    /// Mirroring is symmetric about the box, so `flipped` does not affect
    /// the bounds.
    #[inline]
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        let width = self.image.natural_width * self.transform.scale;
        let height = self.image.natural_height * self.transform.scale;
        (
            self.transform.position.x,
            self.transform.position.y,
            self.transform.position.x + width,
            self.transform.position.y + height,
        )
    }
}

// ============================================================================
// Rendering Instructions
// ============================================================================

/// Visual filter applied to an object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    None,
    Grayscale,
}

/// What the host must paint for one object: translate, scale (X negated when
/// mirrored), and filter. Produced by the transform applier; reapplying the
/// same instruction is a redundant paint, nothing more.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderInstruction {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub filter: Filter,
}

/// What the host must apply to the canvas container: a shared translate and
/// uniform zoom.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasInstruction {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
}

// ============================================================================
// Configuration
// ============================================================================

/// Global default flags consulted when an object is created and swept across
/// all live objects by the bulk toggles.
///
/// Held explicitly on the engine rather than as process globals so the engine
/// is testable in isolation with injected state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDefaults {
    pub flipped: bool,
    pub grayscale: bool,
}

impl Default for ViewDefaults {
    fn default() -> Self {
        // Matches the shipped product: new images start mirrored.
        Self {
            flipped: true,
            grayscale: false,
        }
    }
}

impl ViewDefaults {
    /// Both flags off; the usual choice for tests and embedding hosts that
    /// do not want the mirrored-by-default behavior.
    pub fn plain() -> Self {
        Self {
            flipped: false,
            grayscale: false,
        }
    }
}

/// How gestures scoped to the canvas (not over any object) are applied.
///
/// Resolved once at engine construction; never inferred per gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasGestureMode {
    /// Drag pans a shared canvas offset; pinch zooms a shared canvas scale,
    /// clamped per increment. One canvas instruction per update.
    #[default]
    CanvasTransform,
    /// Drag and pinch are broadcast to every tracked object individually;
    /// each object's own scale is clamped to the canvas zoom range. No
    /// canvas-level transform is touched.
    Broadcast,
}
