//! Transform state store - one record per tracked object.
//!
//! Pure data ownership: records are created at image ingestion, mutated by
//! the gesture controllers and bulk sweeps, and removed atomically on delete.
//! Iteration follows insertion order so bulk sweeps are deterministic and
//! the most recently inserted object is the topmost for hit-testing.

use crate::error::{EngineError, EngineResult};
use crate::types::{CanvasObject, ImageHandle, ObjectId, ObjectTransform, ViewDefaults};
use std::collections::HashMap;

/// Owns every live [`CanvasObject`], keyed by id.
///
/// Ids are allocated from a monotonically increasing counter, so no two live
/// records can share an id and a record is never reassigned to another
/// object.
#[derive(Debug, Default)]
pub struct TransformStore {
    objects: HashMap<ObjectId, CanvasObject>,
    /// Insertion order of live ids; last entry is topmost.
    order: Vec<ObjectId>,
    next_id: ObjectId,
}

impl TransformStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record for a newly ingested image, seeding the transform from
    /// the current view defaults. Returns the new object's id.
    pub fn insert(&mut self, image: ImageHandle, defaults: ViewDefaults) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;

        let object = CanvasObject {
            id,
            transform: ObjectTransform::spawned(defaults),
            image,
        };
        self.objects.insert(id, object);
        self.order.push(id);
        tracing::debug!(id, "object tracked");
        id
    }

    pub fn get(&self, id: ObjectId) -> EngineResult<&CanvasObject> {
        self.objects
            .get(&id)
            .ok_or(EngineError::ObjectNotFound { id })
    }

    pub fn get_mut(&mut self, id: ObjectId) -> EngineResult<&mut CanvasObject> {
        self.objects
            .get_mut(&id)
            .ok_or(EngineError::ObjectNotFound { id })
    }

    /// Remove a record, returning it if it was live.
    pub fn remove(&mut self, id: ObjectId) -> Option<CanvasObject> {
        let removed = self.objects.remove(&id);
        if removed.is_some() {
            self.order.retain(|&o| o != id);
            tracing::debug!(id, "object untracked");
        }
        removed
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Iterate live objects in insertion order (back-to-front).
    pub fn iter(&self) -> impl Iterator<Item = &CanvasObject> {
        self.order.iter().filter_map(|id| self.objects.get(id))
    }

    /// Live ids in insertion order. Cloned so callers can mutate records
    /// while sweeping.
    pub fn ids(&self) -> Vec<ObjectId> {
        self.order.clone()
    }

    /// Live ids from topmost to bottommost, for front-to-back hit scans.
    pub fn ids_top_down(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.order.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
