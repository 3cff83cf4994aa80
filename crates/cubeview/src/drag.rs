use cubemath::{Float, Vector2};
use cubepuzzle::Slice;

use crate::{Geometry, Pick};

/// Kind of pointer drag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DragKind {
    /// Drag across a sticker to twist one of the two slices through it.
    Twist,
    /// Drag anywhere to rotate the whole view.
    Look,
}

/// Pending twist gesture started on a sticker.
///
/// Each candidate slice is paired with the screen direction that turns it
/// clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct TwistDrag {
    candidates: Vec<(Slice, Vector2)>,
}

impl TwistDrag {
    /// Starts a twist gesture on a picked sticker.
    pub fn new(geometry: &Geometry, pick: Pick) -> Self {
        let face = pick.face;
        let rows = Slice::new(face.left(), pick.row, true);
        let cols = Slice::new(face.up(), pick.col, true);
        let candidates = [
            (rows, geometry.face_direction_2d(face.up())),
            (cols, geometry.face_direction_2d(face.neighbors()[0])),
        ]
        .into_iter()
        .filter_map(|(slice, dir)| Some((slice, dir?)))
        .collect();
        Self { candidates }
    }

    /// Returns the slices this gesture could twist.
    pub fn candidates(&self) -> impl Iterator<Item = Slice> + '_ {
        self.candidates.iter().map(|&(slice, _)| slice)
    }

    /// Returns the slice to twist after the pointer moved by `delta` pixels,
    /// or `None` if it has not yet moved more than `threshold` pixels along
    /// any candidate direction. The returned slice is not canonicalized.
    pub fn select(&self, delta: Vector2, threshold: Float) -> Option<Slice> {
        let mut best: Option<(Slice, Float)> = None;
        for &(slice, dir) in &self.candidates {
            let proj = delta.dot(dir);
            let best_proj = best.map_or(threshold, |(_, p)| p.abs());
            if proj.abs() > best_proj {
                best = Some((slice, proj));
            }
        }
        best.map(|(slice, proj)| Slice {
            clockwise: proj > 0.0,
            ..slice
        })
    }
}
