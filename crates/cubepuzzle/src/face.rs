//! Face adjacency topology.

use std::fmt;
use std::str::FromStr;

use cubemath::{Vector3, vector};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

use crate::CubeError;

/// Outward normal of each face in model space.
const FACE_NORMALS: [[i8; 3]; 6] = [
    [0, 0, 1],
    [0, 0, -1],
    [0, 1, 0],
    [0, -1, 0],
    [1, 0, 0],
    [-1, 0, 0],
];

/// For each face: its opposite face followed by its four neighbors in cyclic
/// order.
const ADJACENCY: [[u8; 5]; 6] = [
    [1, 4, 2, 5, 3],
    [0, 5, 2, 4, 3],
    [3, 4, 1, 5, 0],
    [2, 4, 0, 5, 1],
    [5, 1, 2, 0, 3],
    [4, 0, 2, 1, 3],
];

/// Absolute face of the cube, independent of the current view orientation.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Face {
    type Error = CubeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
impl From<Face> for u8 {
    fn from(value: Face) -> Self {
        value.0
    }
}

impl Face {
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;
    /// All faces in index order.
    pub const ALL: [Face; Self::COUNT] = [Face(0), Face(1), Face(2), Face(3), Face(4), Face(5)];

    /// Constructs a face from its absolute index.
    pub fn new(index: u8) -> Result<Self, CubeError> {
        match (index as usize) < Self::COUNT {
            true => Ok(Self(index)),
            false => Err(CubeError::FaceOutOfRange(index)),
        }
    }

    /// Returns the absolute index of the face.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the outward unit normal of the face in model space.
    pub fn normal(self) -> Vector3 {
        let [x, y, z] = FACE_NORMALS[self.index()];
        vector![x, y, z]
    }

    /// Returns the face on the other side of the cube.
    pub fn opposite(self) -> Face {
        Face(ADJACENCY[self.index()][0])
    }

    /// Returns the four faces bordering this one, in cyclic order.
    pub fn neighbors(self) -> [Face; 4] {
        let [_, n1, n2, n3, n4] = ADJACENCY[self.index()];
        [Face(n1), Face(n2), Face(n3), Face(n4)]
    }

    /// Returns the neighbor whose normal is the "left" axis of this face's
    /// element grid. Rows are counted inward from this neighbor.
    pub fn left(self) -> Face {
        self.neighbors()[2]
    }

    /// Returns the neighbor whose normal is the "up" axis of this face's
    /// element grid. Columns are counted inward from this neighbor.
    pub fn up(self) -> Face {
        self.neighbors()[1]
    }

    /// Returns the position (0 to 3) of `neighbor` in this face's cyclic
    /// order, or `None` if the faces do not border each other.
    pub fn cyclic_position(self, neighbor: Face) -> Option<usize> {
        self.neighbors().iter().position(|&n| n == neighbor)
    }

    /// Returns the neighbor that follows `neighbor` in this face's cyclic
    /// order, or `None` if `neighbor` does not border this face.
    pub fn next_neighbor(self, neighbor: Face) -> Option<Face> {
        let i = self.cyclic_position(neighbor)?;
        Some(self.neighbors()[(i + 1) % 4])
    }

    /// Returns whether the two faces share an edge.
    pub fn is_adjacent_to(self, other: Face) -> bool {
        self.cyclic_position(other).is_some()
    }
}

/// Face identified by its visual role under the current view orientation.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum LogicalFace {
    #[strum(to_string = "front", serialize = "f")]
    Front,
    #[strum(to_string = "back", serialize = "b")]
    Back,
    #[strum(to_string = "left", serialize = "l")]
    Left,
    #[strum(to_string = "right", serialize = "r")]
    Right,
    #[strum(to_string = "up", serialize = "u")]
    Up,
    #[strum(to_string = "down", serialize = "d")]
    Down,
}

impl LogicalFace {
    /// Returns the logical face on the other side of the cube.
    pub fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Face as given in a rotation request: either an absolute face or one
/// resolved from the current view orientation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FaceRef {
    /// Absolute face index.
    Absolute(Face),
    /// Face identified by its visual role.
    Logical(LogicalFace),
}

impl fmt::Display for FaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceRef::Absolute(face) => write!(f, "{face}"),
            FaceRef::Logical(logical) => write!(f, "{logical}"),
        }
    }
}

impl From<Face> for FaceRef {
    fn from(value: Face) -> Self {
        Self::Absolute(value)
    }
}
impl From<LogicalFace> for FaceRef {
    fn from(value: LogicalFace) -> Self {
        Self::Logical(value)
    }
}

impl FromStr for FaceRef {
    type Err = CubeError;

    /// Parses a face digit (`"0"` to `"5"`) or a logical face letter or name
    /// (`"f"`, `"Back"`, etc.).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Ok(Self::Absolute(Face::new(index)?));
        }
        s.parse::<LogicalFace>()
            .map(Self::Logical)
            .map_err(|_| CubeError::UnknownFace(s.to_owned()))
    }
}
