//! Thread-safe engine wrapper.
//!
//! The engine itself is single-threaded: gesture callbacks run to completion
//! on one execution context and events within a gesture stream apply in
//! emission order. Hosts that deliver input from more than one thread (e.g.
//! a background re-render pipeline) wrap the engine here; whole-engine
//! locking per mutation is enough given the short critical sections and low
//! contention.

use crate::engine::Engine;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Cloneable handle to a mutex-guarded [`Engine`].
#[derive(Clone, Debug)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Lock the engine for a sequence of operations.
    ///
    /// Hold the guard across a whole gesture event (mutation plus re-render)
    /// so another thread cannot interleave mid-mutation.
    pub fn lock(&self) -> MutexGuard<'_, Engine> {
        self.inner.lock()
    }

    /// Run a closure with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new(Engine::default())
    }
}
