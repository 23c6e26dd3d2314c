//! Spatial Index Module
//!
//! R-tree based spatial indexing over the rendered bounds of tracked
//! objects. Gesture routing hit-tests every gesture start against these
//! bounds; the index keeps that at O(log n) instead of O(n).
//!
//! The index mirrors the transform store: the engine updates an object's
//! entry after every geometry mutation and removes it on delete.

use crate::types::{CanvasObject, ObjectId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Rendered bounding box of one tracked object.
#[derive(Debug, Clone, Copy)]
pub struct BoundsEntry {
    pub object_id: ObjectId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BoundsEntry {
    /// Derive the entry from an object's current transform and intrinsic
    /// image size. Mirroring does not change the box.
    pub fn from_object(object: &CanvasObject) -> Self {
        let (min_x, min_y, max_x, max_y) = object.bounds();
        Self {
            object_id: object.id,
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for BoundsEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for BoundsEntry {
    fn eq(&self, other: &Self) -> bool {
        self.object_id == other.object_id
    }
}

/// Spatial index over tracked objects using an R-tree.
/// Provides O(log n) point queries for gesture hit testing.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    tree: RTree<BoundsEntry>,
    entries: HashMap<ObjectId, BoundsEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or refresh an object's entry from its current state.
    pub fn update(&mut self, object: &CanvasObject) {
        if let Some(old) = self.entries.remove(&object.id) {
            self.tree.remove(&old);
        }
        let entry = BoundsEntry::from_object(object);
        self.tree.insert(entry);
        self.entries.insert(object.id, entry);
    }

    pub fn remove(&mut self, object_id: ObjectId) -> bool {
        if let Some(entry) = self.entries.remove(&object_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All objects whose rendered bounds contain the given canvas-space
    /// point. Order is unspecified; callers resolve z-order themselves.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<ObjectId> {
        let probe = AABB::from_point([x, y]);
        self.tree
            .locate_in_envelope_intersecting(&probe)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.object_id)
            .collect()
    }

    /// Rebuild every entry from scratch. Cheaper than n individual updates
    /// after a broadcast sweep touched all objects.
    pub fn rebuild<'a, I>(&mut self, objects: I)
    where
        I: Iterator<Item = &'a CanvasObject>,
    {
        let entries: Vec<BoundsEntry> = objects.map(BoundsEntry::from_object).collect();
        self.entries = entries.iter().map(|e| (e.object_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
