//! Object lifecycle, context actions, and bulk toggle sweeps.

use crate::engine::Engine;
use crate::profile_scope;
use crate::render::{RenderSink, object_instruction};
use crate::types::{ImageHandle, ObjectId};

impl Engine {
    // ==================== Lifecycle ====================

    /// Track a freshly decoded image as a new canvas object.
    ///
    /// Called by the host's ingestion layer once per successfully decoded
    /// image. The transform is seeded from the current default flags and the
    /// object is rendered once immediately.
    pub fn add_image(&mut self, image: ImageHandle, sink: &mut dyn RenderSink) -> ObjectId {
        let id = self.store.insert(image, self.defaults);
        // Infallible: just inserted.
        if let Ok(object) = self.store.get(id) {
            let snapshot = *object;
            self.index.update(&snapshot);
            sink.apply_object(id, object_instruction(&snapshot.transform));
        }
        id
    }

    /// Delete an object: store record, spatial entry, and visual node go
    /// together. Unknown ids no-op silently - the node is already gone.
    pub fn delete_one(&mut self, id: ObjectId, sink: &mut dyn RenderSink) {
        if self.store.remove(id).is_none() {
            tracing::debug!(id, "delete for untracked object ignored");
            return;
        }
        self.index.remove(id);
        sink.remove_object(id);
    }

    // ==================== Context Actions ====================

    /// Mirror a single object, from the hold-gesture context menu. Unknown
    /// ids no-op silently.
    pub fn flip_one(&mut self, id: ObjectId, sink: &mut dyn RenderSink) {
        let Ok(object) = self.store.get_mut(id) else {
            tracing::debug!(id, "flip for untracked object ignored");
            return;
        };
        object.transform.flipped = !object.transform.flipped;
        sink.apply_object(id, object_instruction(&object.transform));
    }

    // ==================== Bulk Toggles ====================

    /// Negate the flip default and sweep it onto every tracked object.
    ///
    /// The sweep overwrites; it does not restore per-object heterogeneity
    /// introduced by [`Engine::flip_one`] in between.
    pub fn toggle_flip_all(&mut self, sink: &mut dyn RenderSink) {
        profile_scope!("toggle_flip_all");

        self.defaults.flipped = !self.defaults.flipped;
        let flipped = self.defaults.flipped;
        tracing::debug!(flipped, count = self.store.len(), "flip-all sweep");

        for id in self.store.ids() {
            if let Ok(object) = self.store.get_mut(id) {
                object.transform.flipped = flipped;
                sink.apply_object(id, object_instruction(&object.transform));
            }
        }
    }

    /// Negate the grayscale default and sweep it onto every tracked object.
    pub fn toggle_grayscale_all(&mut self, sink: &mut dyn RenderSink) {
        profile_scope!("toggle_grayscale_all");

        self.defaults.grayscale = !self.defaults.grayscale;
        let grayscale = self.defaults.grayscale;
        tracing::debug!(grayscale, count = self.store.len(), "grayscale-all sweep");

        for id in self.store.ids() {
            if let Ok(object) = self.store.get_mut(id) {
                object.transform.grayscale = grayscale;
                sink.apply_object(id, object_instruction(&object.transform));
            }
        }
    }
}
