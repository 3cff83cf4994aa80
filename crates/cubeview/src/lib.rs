//! Interactive N×N×N cube simulation.
//!
//! [`RubikCube`] owns the authoritative [`CubeState`](cubepuzzle::CubeState)
//! together with everything needed to present it: the view orientation, the
//! queue of animated slice rotations, the undo stack, and a cache of
//! per-orientation geometry. The host drives it with explicit calls to
//! [`RubikCube::advance()`] and draws whatever [`RubikCube::frame()`] returns.

mod animation;
mod cube;
mod drag;
mod geometry;
mod logical;
mod pick;
mod render;
#[cfg(test)]
mod tests;

pub use animation::{AnimationKind, AnimationQueue, AnimationTask, Tick};
pub use cube::{RubikCube, ShuffleMode};
pub use drag::{DragKind, TwistDrag};
pub use geometry::{Block, Geometry, PartialTurn, SubFace, VertexRef};
pub use logical::LogicalFaces;
pub use pick::Pick;
pub use render::{FacetKind, Fill, Frame, RenderFacet, Viewport};
