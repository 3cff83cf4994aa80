use cubemath::{Matrix3, Vector3};
use cubepuzzle::{Face, LogicalFace};
use float_ord::FloatOrd;

/// Assignment of visual roles to absolute faces under one view orientation.
///
/// Ties between equally-placed faces go to the lowest face index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LogicalFaces {
    /// Face pointing most toward the viewer.
    pub front: Face,
    /// Face pointing most leftward, other than `front`.
    pub left: Face,
    /// Face pointing most upward, other than `front` and `left`.
    pub up: Face,
}

impl LogicalFaces {
    /// Computes the logical faces for a view orientation.
    pub fn from_matrix(matrix: &Matrix3) -> Self {
        let normals: [Vector3; Face::COUNT] = Face::ALL.map(|f| *matrix * f.normal());
        let n = |f: Face| normals[f.index()];

        let candidates = || Face::ALL.into_iter();
        let front = candidates()
            .min_by_key(|&f| FloatOrd(-n(f).z))
            .unwrap_or_default();
        let left = candidates()
            .filter(|&f| f != front)
            .min_by_key(|&f| FloatOrd(n(f).x))
            .unwrap_or_default();
        let up = candidates()
            .filter(|&f| f != front && f != left)
            .min_by_key(|&f| FloatOrd(n(f).y))
            .unwrap_or_default();

        Self { front, left, up }
    }

    /// Returns the absolute face currently playing a visual role.
    pub fn get(&self, logical: LogicalFace) -> Face {
        match logical {
            LogicalFace::Front => self.front,
            LogicalFace::Back => self.front.opposite(),
            LogicalFace::Left => self.left,
            LogicalFace::Right => self.left.opposite(),
            LogicalFace::Up => self.up,
            LogicalFace::Down => self.up.opposite(),
        }
    }
}
