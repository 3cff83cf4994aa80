use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CubeError, Face, FaceRef};

/// Layer of the cube parallel to a face, along with a turning direction.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Slice {
    /// Face whose outward normal is the rotation axis.
    pub face: Face,
    /// Layer index counted inward from `face`, starting at 0.
    pub depth: usize,
    /// Whether the slice turns clockwise when viewed from outside `face`.
    pub clockwise: bool,
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = if self.clockwise { "cw" } else { "ccw" };
        write!(f, "[{} {} {dir}]", self.face, self.depth)
    }
}

impl Slice {
    /// Constructs a slice.
    pub const fn new(face: Face, depth: usize, clockwise: bool) -> Self {
        Self {
            face,
            depth,
            clockwise,
        }
    }

    /// Returns the same slice turning the other way.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }

    /// Returns the equivalent slice seen from the opposite face.
    #[must_use]
    pub fn mirror(self, size: usize) -> Self {
        Self {
            face: self.face.opposite(),
            depth: size - self.depth - 1,
            clockwise: !self.clockwise,
        }
    }

    /// Returns whether the slice is no deeper than the middle of the cube.
    pub fn is_canonical(self, size: usize) -> bool {
        2 * self.depth < size
    }

    /// Rewrites a slice in the far half of the cube as the equivalent slice
    /// on the opposite face. `depth` must be less than `size`.
    #[must_use]
    pub fn canonicalize(self, size: usize) -> Self {
        match self.is_canonical(size) {
            true => self,
            false => self.mirror(size),
        }
    }

    /// Returns an error if the slice does not fit in a cube of size `size`.
    pub fn validate(self, size: usize) -> Result<(), CubeError> {
        if self.depth >= size {
            return Err(CubeError::DepthOutOfRange {
                depth: self.depth,
                size,
            });
        }
        Ok(())
    }
}

/// Slice rotation request whose face may not yet be resolved to an absolute
/// face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SliceRequest {
    /// Face whose outward normal is the rotation axis.
    pub face: FaceRef,
    /// Layer index counted inward from `face`, starting at 0.
    pub depth: usize,
    /// Whether the slice turns clockwise when viewed from outside `face`.
    pub clockwise: bool,
}

impl From<Slice> for SliceRequest {
    fn from(value: Slice) -> Self {
        Self {
            face: FaceRef::Absolute(value.face),
            depth: value.depth,
            clockwise: value.clockwise,
        }
    }
}

impl SliceRequest {
    /// Constructs a slice request.
    pub fn new(face: impl Into<FaceRef>, depth: usize, clockwise: bool) -> Self {
        Self {
            face: face.into(),
            depth,
            clockwise,
        }
    }

    /// Resolves the request to an absolute, validated, canonical slice.
    /// `resolve_face` maps logical faces to absolute faces.
    pub fn resolve(
        self,
        size: usize,
        resolve_face: impl FnOnce(crate::LogicalFace) -> Face,
    ) -> Result<Slice, CubeError> {
        let face = match self.face {
            FaceRef::Absolute(face) => face,
            FaceRef::Logical(logical) => resolve_face(logical),
        };
        let slice = Slice::new(face, self.depth, self.clockwise);
        slice.validate(size)?;
        Ok(slice.canonicalize(size))
    }
}
