use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CubeError, Face, Slice};

/// Facelet color, identified by the face it starts on.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct Color(pub u8);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Face> for Color {
    fn from(value: Face) -> Self {
        Color(u8::from(value))
    }
}

impl Color {
    /// Returns the color index, from 0 to 5.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Colors of every facelet on an N×N×N cube.
///
/// Element `e` of a face sits at row `e / size` and column `e % size` of that
/// face's grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    size: usize,
    faces: [Vec<Color>; Face::COUNT],
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (face, colors) in Face::ALL.iter().zip(&self.faces) {
            write!(f, "{face}:")?;
            for row in colors.chunks(self.size) {
                write!(f, " ")?;
                for color in row {
                    write!(f, "{color}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl CubeState {
    /// Constructs a solved cube, with every facelet on face `f` colored `f`.
    pub fn new_solved(size: usize) -> Result<Self, CubeError> {
        if size == 0 {
            return Err(CubeError::InvalidSize(size));
        }
        let faces = Face::ALL.map(|face| vec![Color::from(face); size * size]);
        Ok(Self { size, faces })
    }

    /// Returns the number of layers along each axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the colors of every element on a face, in element order.
    pub fn face(&self, face: Face) -> &[Color] {
        &self.faces[face.index()]
    }

    /// Returns the color of one element of a face.
    ///
    /// # Panics
    ///
    /// Panics if `element >= size * size`.
    pub fn get(&self, face: Face, element: usize) -> Color {
        self.faces[face.index()][element]
    }

    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|colors| colors.iter().all(|&c| c == colors[0]))
    }

    /// Returns the number of facelets of each color.
    pub fn color_counts(&self) -> [usize; Face::COUNT] {
        let mut counts = [0; Face::COUNT];
        for color in self.faces.iter().flatten() {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Returns the `size` colors on `neighbor` that belong to the layer of
    /// `axis` at `depth`.
    ///
    /// # Panics
    ///
    /// Panics if `neighbor` does not border `axis`.
    pub fn ring(&self, axis: Face, depth: usize, neighbor: Face) -> Vec<Color> {
        (0..self.size)
            .map(|k| self.get(neighbor, ring_element(self.size, axis, depth, neighbor, k)))
            .collect()
    }

    /// Rotates a slice by a quarter turn and returns the canonical slice that
    /// was applied. Invalid slices leave the state untouched.
    pub fn rotate(&mut self, slice: Slice) -> Result<Slice, CubeError> {
        slice.validate(self.size)?;
        let slice = slice.canonicalize(self.size);
        log::trace!("rotating slice {slice}");

        if slice.depth == 0 {
            self.rotate_face_grid(slice.face, slice.clockwise);
        }

        let neighbors = slice.face.neighbors();
        let rings = neighbors.map(|nb| self.ring(slice.face, slice.depth, nb));
        for (i, ring) in rings.into_iter().enumerate() {
            let target = match slice.clockwise {
                true => neighbors[(i + 1) % 4],
                false => neighbors[(i + 3) % 4],
            };
            for (k, color) in ring.into_iter().enumerate() {
                let e = ring_element(self.size, slice.face, slice.depth, target, k);
                self.faces[target.index()][e] = color;
            }
        }

        Ok(slice)
    }

    /// Rotates the element grid of a single face by 90 degrees.
    fn rotate_face_grid(&mut self, face: Face, clockwise: bool) {
        let n = self.size;
        let old = &self.faces[face.index()];
        let new = (0..n * n)
            .map(|e| {
                let (i, j) = (e / n, e % n);
                match clockwise {
                    true => old[(n - j - 1) * n + i],
                    false => old[j * n + (n - i - 1)],
                }
            })
            .collect();
        self.faces[face.index()] = new;
    }
}

/// Returns the index of the `k`th element of the ring that the layer of `axis`
/// at `depth` draws on `face`.
///
/// The ring is addressed by the position of `axis` in `face`'s own cyclic
/// neighbor order, so that walking `k` from 0 to `size - 1` on each of the four
/// ring faces visits the ring in a consistent direction.
///
/// # Panics
///
/// Panics if `face` does not border `axis`.
pub fn ring_element(size: usize, axis: Face, depth: usize, face: Face, k: usize) -> usize {
    let n = size;
    let d = depth;
    match face.cyclic_position(axis) {
        Some(0) => d * n + k,
        Some(1) => k * n + n - d - 1,
        Some(2) => (n - d - 1) * n + (n - k - 1),
        Some(3) => (n - k - 1) * n + d,
        _ => panic!("face {face} does not border face {axis}"),
    }
}
