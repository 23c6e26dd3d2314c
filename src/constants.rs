//! Engine-wide constants.
//!
//! Centralizes magic numbers and default values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Object Defaults
// ============================================================================

/// Canvas-space position a newly ingested image spawns at
pub const SPAWN_POSITION: (f32, f32) = (100.0, 100.0);

/// Scale a newly ingested image starts with
pub const DEFAULT_OBJECT_SCALE: f32 = 1.0;

/// Floor for any computed object scale.
///
/// Multiplicative pinch updates from a positive seed cannot reach zero, but a
/// pinch delta of -1.0 or below would. A zero or negative scale collapses or
/// inverts the object, so computed scales are floored at this epsilon.
pub const MIN_OBJECT_SCALE: f32 = 1e-4;

// ============================================================================
// Canvas Zoom
// ============================================================================

/// Minimum canvas zoom level
pub const MIN_CANVAS_ZOOM: f32 = 0.5;

/// Maximum canvas zoom level
pub const MAX_CANVAS_ZOOM: f32 = 3.0;

/// Default canvas zoom level
pub const DEFAULT_CANVAS_ZOOM: f32 = 1.0;

/// Fit-to-viewport never zooms in past this; it only shrinks content to fit
pub const MAX_FIT_SCALE: f32 = 1.0;
