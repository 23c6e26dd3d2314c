//! Transform applier - maps transform state to rendering instructions.
//!
//! The applier is a pure function: same transform in, same instruction out.
//! The engine calls it after every mutation and hands the result to the
//! host's [`RenderSink`]; the engine itself never paints anything.

use crate::types::{
    CanvasInstruction, CanvasTransform, Filter, ObjectId, ObjectTransform, RenderInstruction,
};

/// Compute the rendering instruction for one object transform.
///
/// Mirroring negates the X scale only in the instruction; the stored scale
/// stays positive.
#[inline]
pub fn object_instruction(transform: &ObjectTransform) -> RenderInstruction {
    let scale_x = if transform.flipped {
        -transform.scale
    } else {
        transform.scale
    };
    RenderInstruction {
        translate_x: transform.position.x,
        translate_y: transform.position.y,
        scale_x,
        scale_y: transform.scale,
        filter: if transform.grayscale {
            Filter::Grayscale
        } else {
            Filter::None
        },
    }
}

/// Compute the rendering instruction for the canvas container.
#[inline]
pub fn canvas_instruction(canvas: &CanvasTransform) -> CanvasInstruction {
    CanvasInstruction {
        translate_x: canvas.offset.x,
        translate_y: canvas.offset.y,
        scale: canvas.scale,
    }
}

/// The engine's outbound rendering seam.
///
/// The host applies each instruction to the object's visual node (CSS
/// transform, scene-graph node, whatever it uses). Instructions arrive
/// immediately after every state mutation, in mutation order; the host may
/// coalesce paints, the engine never coalesces state.
pub trait RenderSink {
    /// Apply an object's full visual state.
    fn apply_object(&mut self, id: ObjectId, instruction: RenderInstruction);

    /// Apply the shared canvas transform.
    fn apply_canvas(&mut self, instruction: CanvasInstruction);

    /// Tear down the visual node of a deleted object.
    fn remove_object(&mut self, id: ObjectId);
}

/// Sink that discards every instruction. Useful when mutating state before a
/// host surface exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl RenderSink for NoopSink {
    fn apply_object(&mut self, _id: ObjectId, _instruction: RenderInstruction) {}
    fn apply_canvas(&mut self, _instruction: CanvasInstruction) {}
    fn remove_object(&mut self, _id: ObjectId) {}
}
