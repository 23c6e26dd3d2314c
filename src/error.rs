//! Error types for engine operations
//!
//! Gesture paths never surface these to the user: lookup failures and
//! degenerate content degrade to silent no-ops inside the engine, since
//! interrupting a direct-manipulation gesture is worse than dropping it.
//! The typed variants exist for hosts that query state explicitly.

use crate::types::ObjectId;
use thiserror::Error;

/// Errors that can occur during engine operations
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// An operation referenced an object no longer in the store, e.g. deleted
    /// between a hold-gesture opening a menu and the menu action firing
    #[error("object {id} is not tracked")]
    ObjectNotFound { id: ObjectId },

    /// Fit-to-viewport found a zero-area union bounding box
    #[error("content bounding box has zero area")]
    DegenerateContent,

    /// A computed scale came out non-positive
    #[error("invalid scale: {value}")]
    InvalidScale { value: f32 },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
