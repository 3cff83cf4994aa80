//! State and slice rotation engine for an N×N×N cube.
//!
//! The cube has six faces, each an `N×N` grid of facelets. Faces are
//! identified by absolute index (see [`Face`]), and every facelet holds the
//! index of the face it started on (see [`Color`]). The only way to mutate a
//! [`CubeState`] is to [rotate](CubeState::rotate) a [`Slice`].

mod error;
mod face;
pub mod scramble;
mod slice;
mod state;
#[cfg(test)]
mod tests;

pub use error::CubeError;
pub use face::{Face, FaceRef, LogicalFace};
pub use slice::{Slice, SliceRequest};
pub use state::{Color, CubeState, ring_element};
