use cubemath::{Float, Vector2, vector};
use cubepuzzle::Face;

use crate::Geometry;

/// Element of the cube under a point on the screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pick {
    /// Face that was hit.
    pub face: Face,
    /// Layer index counted inward from the face's left neighbor.
    pub row: usize,
    /// Layer index counted inward from the face's up neighbor.
    pub col: usize,
}

impl Pick {
    /// Returns the index of the picked element within its face.
    pub fn element_index(self, size: usize) -> usize {
        (size - 1 - self.row) * size + (size - 1 - self.col)
    }
}

impl Geometry {
    /// Returns the element under a point in normalized view coordinates, or
    /// `None` if the point misses the cube.
    ///
    /// Faces are tested in index order and the first hit wins. Only the
    /// stationary geometry is considered, so a slice caught mid-turn is picked
    /// as if it were at rest.
    pub fn pick(&self, point: Vector2) -> Option<Pick> {
        let n = self.size();
        Face::ALL.into_iter().find_map(|face| {
            let norm = self.face_normal(face);
            if norm.z <= 0.0 {
                return None;
            }
            // Intersect the orthographic viewing ray with the face plane.
            let z = (1.0 - point.x * norm.x - point.y * norm.y) / norm.z;
            let offset = vector![point.x, point.y, z] - norm;

            let layer = |neighbor: Face| {
                let t = (1.0 - self.face_normal(neighbor).dot(offset)) / 2.0 * n as Float;
                let i = t.floor();
                (0.0..n as Float).contains(&i).then_some(i as usize)
            };
            Some(Pick {
                face,
                row: layer(face.left())?,
                col: layer(face.up())?,
            })
        })
    }
}
