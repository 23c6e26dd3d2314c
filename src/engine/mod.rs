//! Engine module - the top-level gesture-to-transform engine.
//!
//! This module is organized into several submodules:
//! - `state` - The Engine struct definition and construction
//! - `objects` - Object lifecycle, context actions, and bulk toggles
//! - `view` - Fit-to-viewport normalization and viewport metrics

mod objects;
mod state;
mod view;

pub use state::Engine;
pub use view::{FixedViewport, ViewportMetrics};
