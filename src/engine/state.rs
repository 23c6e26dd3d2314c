//! Engine state - the Engine struct definition and construction.

use crate::error::EngineResult;
use crate::input::GesturePhase;
use crate::spatial_index::SpatialIndex;
use crate::store::TransformStore;
use crate::types::{CanvasGestureMode, CanvasTransform, ObjectId, ObjectTransform, ViewDefaults};

/// The gesture-to-transform engine.
///
/// Owns all canvas state: the per-object transform store, the spatial index
/// mirroring it, the shared canvas transform, the global default flags, and
/// the phase of the gesture in flight. All methods take `&mut self` and run
/// to completion; the engine is single-threaded by construction (wrap it in
/// [`crate::SharedEngine`] to drive it from several threads).
#[derive(Debug)]
pub struct Engine {
    pub(crate) store: TransformStore,
    pub(crate) index: SpatialIndex,
    pub(crate) canvas: CanvasTransform,
    pub(crate) defaults: ViewDefaults,
    pub(crate) phase: GesturePhase,
    pub(crate) mode: CanvasGestureMode,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(CanvasGestureMode::default(), ViewDefaults::default())
    }
}

impl Engine {
    /// Create an engine with the given canvas gesture mode and initial
    /// default flags. Both are fixed product decisions, not per-gesture
    /// choices.
    pub fn new(mode: CanvasGestureMode, defaults: ViewDefaults) -> Self {
        Self {
            store: TransformStore::new(),
            index: SpatialIndex::new(),
            canvas: CanvasTransform::default(),
            defaults,
            phase: GesturePhase::Idle,
            mode,
        }
    }

    // ==================== State Queries ====================

    /// Current shared canvas transform.
    pub fn canvas_transform(&self) -> CanvasTransform {
        self.canvas
    }

    /// Current global default flags.
    pub fn defaults(&self) -> ViewDefaults {
        self.defaults
    }

    /// The configured canvas gesture mode.
    pub fn mode(&self) -> CanvasGestureMode {
        self.mode
    }

    /// Phase of the gesture in flight, if any.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Number of tracked objects.
    pub fn object_count(&self) -> usize {
        self.store.len()
    }

    /// Whether an object is still tracked.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.store.contains(id)
    }

    /// A tracked object's current transform.
    pub fn transform_of(&self, id: ObjectId) -> EngineResult<ObjectTransform> {
        self.store.get(id).map(|object| object.transform)
    }

    /// Ids of all tracked objects in insertion order.
    pub fn object_ids(&self) -> Vec<ObjectId> {
        self.store.ids()
    }
}
