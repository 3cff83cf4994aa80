//! View-space geometry of the cube, including a partially turned slice.
//!
//! While a slice turns, the cube splits along the slice's axis into three
//! rigid blocks: [`Block::Far`] (every layer beyond the slice), the
//! [`Block::Turning`] slice itself, and [`Block::Near`] (the layers between
//! the slice and its face). Each block has six faces, giving eighteen
//! [`SubFace`]s. When nothing is turning, the far block is the whole cube and
//! the other two blocks are empty.
//!
//! Positions are in view space, where the cube spans `-1..=1` on each axis, X
//! points right, Y points down, and Z points toward the viewer.

use std::cell::OnceCell;

use cubemath::{Float, Matrix3, Vector2, Vector3};
use cubepuzzle::{Face, Slice, ring_element};

use crate::LogicalFaces;

/// Normal assigned to sub-faces that are not drawn. It points away from the
/// viewer, so these sub-faces are never visible.
const HIDDEN_NORMAL: Vector3 = Vector3::new(0.0, 0.0, -1.0);

/// Rigid group of layers during a slice animation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Block {
    Far = 0,
    Turning = 1,
    Near = 2,
}

impl Block {
    /// All blocks, in drawing order when the turning face points toward the
    /// viewer.
    pub const ALL: [Block; 3] = [Block::Far, Block::Turning, Block::Near];
}

/// One face of one [`Block`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubFace {
    /// Block that the face belongs to.
    pub block: Block,
    /// Orientation of the face within the block.
    pub face: Face,
}

impl SubFace {
    /// Number of sub-faces.
    pub const COUNT: usize = 18;

    /// Returns every sub-face in index order.
    pub fn all() -> impl Iterator<Item = SubFace> {
        Block::ALL
            .into_iter()
            .flat_map(|block| Face::ALL.map(|face| SubFace { block, face }))
    }

    /// Constructs a sub-face.
    pub const fn new(block: Block, face: Face) -> Self {
        Self { block, face }
    }

    /// Returns the sub-face's absolute index, from 0 to 17.
    pub fn index(self) -> usize {
        self.block as usize * Face::COUNT + self.face.index()
    }

    /// Returns the face of the same block in a different orientation.
    fn sibling(self, face: Face) -> Self {
        Self { face, ..self }
    }
}

/// Vertex of an element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VertexRef {
    /// Corner from 0 to 3. Bit 1 selects the far side along the face's left
    /// axis and bit 0 selects the far side along its up axis.
    Corner(u8),
    /// Center of the element.
    Center,
}

impl VertexRef {
    /// All four corners, in the order they form a convex polygon.
    pub const POLYGON: [VertexRef; 4] = [
        VertexRef::Corner(0),
        VertexRef::Corner(1),
        VertexRef::Corner(3),
        VertexRef::Corner(2),
    ];

    /// Returns the fractional offset of the vertex from the element's origin
    /// corner, along the left and up axes.
    fn offsets(self) -> (Float, Float) {
        match self {
            VertexRef::Corner(v) => {
                debug_assert!(v < 4, "corner index {v} out of range");
                ((v / 2) as Float, (v % 2) as Float)
            }
            VertexRef::Center => (0.5, 0.5),
        }
    }
}

/// Slice caught partway through an animated rotation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PartialTurn {
    /// Turning slice, in canonical form.
    pub slice: Slice,
    /// Rotation angle in radians. Positive angles turn clockwise.
    pub angle: Float,
}

/// View-dependent geometry of the cube for one orientation and partial turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    size: usize,
    turn: Option<PartialTurn>,
    normals: [Vector3; SubFace::COUNT],
}

impl Geometry {
    /// Computes the geometry of a cube of size `size` under `matrix`, with
    /// `turn` in progress.
    pub fn new(size: usize, matrix: &Matrix3, turn: Option<PartialTurn>) -> Self {
        let mut normals = [HIDDEN_NORMAL; SubFace::COUNT];
        for sub in SubFace::all() {
            normals[sub.index()] = sub_face_normal(matrix, turn, sub);
        }
        Self {
            size,
            turn,
            normals,
        }
    }

    /// Returns the number of layers along each axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the partial turn in progress, if any.
    pub fn turn(&self) -> Option<PartialTurn> {
        self.turn
    }

    /// Returns the view-space outward normal of a sub-face.
    pub fn normal(&self, sub: SubFace) -> Vector3 {
        self.normals[sub.index()]
    }

    /// Returns the view-space outward normal of a face of the far block, which
    /// is the whole cube when nothing is turning.
    pub fn face_normal(&self, face: Face) -> Vector3 {
        self.normal(SubFace::new(Block::Far, face))
    }

    /// Returns the 2D screen direction of a face's normal, or `None` if the
    /// normal points straight at or away from the viewer.
    pub fn face_direction_2d(&self, face: Face) -> Option<Vector2> {
        self.face_normal(face).xy().normalize()
    }

    /// Returns the number of elements drawn on a sub-face.
    pub fn element_count(&self, sub: SubFace) -> usize {
        let n = self.size;
        let Some(PartialTurn { slice, .. }) = self.turn else {
            return match sub.block {
                Block::Far => n * n,
                Block::Turning | Block::Near => 0,
            };
        };
        let d = slice.depth;

        if sub.block == Block::Near && d == 0 {
            0
        } else if sub.face == slice.face {
            match sub.block {
                Block::Near => n * n,
                Block::Turning if d == 0 => n * n,
                Block::Turning | Block::Far => 1,
            }
        } else if sub.face == slice.face.opposite() {
            match sub.block {
                Block::Far => n * n,
                Block::Turning | Block::Near => 1,
            }
        } else {
            match sub.block {
                Block::Near => d * n,
                Block::Turning => n,
                Block::Far => (n - d - 1) * n,
            }
        }
    }

    /// Returns whether a sub-face is a cut surface exposed by the partial
    /// turn, rather than part of the cube's exterior.
    pub fn is_inner_surface(&self, sub: SubFace) -> bool {
        let Some(PartialTurn { slice, .. }) = self.turn else {
            return false;
        };
        if sub.face == slice.face {
            match sub.block {
                Block::Far => true,
                Block::Turning => slice.depth > 0,
                Block::Near => false,
            }
        } else if sub.face == slice.face.opposite() {
            sub.block != Block::Far
        } else {
            false
        }
    }

    /// Returns the face and element index in the cube state that an element
    /// of a sub-face displays, or `None` for inner surfaces.
    pub fn sticker(&self, sub: SubFace, element: usize) -> Option<(Face, usize)> {
        if self.is_inner_surface(sub) {
            return None;
        }
        Some((sub.face, self.sticker_element(sub, element)))
    }

    fn sticker_element(&self, sub: SubFace, element: usize) -> usize {
        let n = self.size;
        let Some(PartialTurn { slice, .. }) = self.turn else {
            return element;
        };
        let axis = slice.face;
        if sub.face == axis || sub.face == axis.opposite() {
            return element;
        }
        let depth = match sub.block {
            Block::Near => element / n,
            Block::Turning => slice.depth,
            Block::Far => element / n + slice.depth + 1,
        };
        ring_element(n, axis, depth, sub.face, element % n)
    }

    /// Returns the view-space position of a vertex of an element of a
    /// sub-face.
    pub fn element_vertex(&self, sub: SubFace, element: usize, vertex: VertexRef) -> Vector3 {
        let n = self.size as Float;
        let norm = self.normal(sub);
        let left = self.normal(sub.sibling(sub.face.left()));
        let up = self.normal(sub.sibling(sub.face.up()));
        let (a, b) = vertex.offsets();

        if let Some(depth) = self.inner_surface_depth(sub) {
            return norm * (depth as Float / n * 2.0 - 1.0)
                + left * (a * 2.0 - 1.0)
                + up * (b * 2.0 - 1.0);
        }

        let e = self.sticker_element(sub, element);
        let row = (e / self.size) as Float;
        let col = (e % self.size) as Float;
        norm + left * ((row + a) / n * 2.0 - 1.0) + up * ((col + b) / n * 2.0 - 1.0)
    }

    /// Returns the number of layers between an inner surface and the opposite
    /// side of the cube, measured along the inner surface's normal.
    fn inner_surface_depth(&self, sub: SubFace) -> Option<usize> {
        let PartialTurn { slice, .. } = self.turn?;
        if !self.is_inner_surface(sub) {
            return None;
        }
        let (n, d) = (self.size, slice.depth);
        Some(match (sub.face == slice.face, sub.block) {
            (true, Block::Far) => n - d - 1,
            (true, _) => n - d,
            (false, Block::Turning) => d + 1,
            (false, _) => d,
        })
    }

    /// Returns the drawing rank of a sub-face, or `None` if it faces away from
    /// the viewer. Sub-faces must be drawn in increasing rank.
    pub fn z_order(&self, sub: SubFace) -> Option<i32> {
        if self.normal(sub).z <= 0.0 {
            return None;
        }
        let rank = sub.index() as i32;
        match self.turn {
            Some(turn) if self.face_normal(turn.slice.face).z < 0.0 => Some(-rank),
            _ => Some(rank),
        }
    }

    /// Returns the sub-faces that face the viewer, in drawing order.
    pub fn visible_sub_faces(&self) -> Vec<SubFace> {
        let mut visible: Vec<(SubFace, i32)> = SubFace::all()
            .filter_map(|sub| Some((sub, self.z_order(sub)?)))
            .collect();
        visible.sort_by_key(|&(_, rank)| rank);
        visible.into_iter().map(|(sub, _)| sub).collect()
    }
}

fn sub_face_normal(matrix: &Matrix3, turn: Option<PartialTurn>, sub: SubFace) -> Vector3 {
    let static_normal = *matrix * sub.face.normal();
    let turn = match (sub.block, turn) {
        (Block::Far, _) => return static_normal,
        (_, None) => return HIDDEN_NORMAL,
        (Block::Near, Some(turn)) if turn.slice.depth == 0 => return HIDDEN_NORMAL,
        (Block::Near, Some(_)) => return static_normal,
        (Block::Turning, Some(turn)) => turn,
    };

    let axis = turn.slice.face;
    match axis.next_neighbor(sub.face) {
        None => static_normal,
        Some(next) => {
            let (sin, cos) = turn.angle.sin_cos();
            *matrix * (sub.face.normal() * cos + next.normal() * sin)
        }
    }
}

/// Lazily computed view-dependent state, owned by the cube and invalidated
/// whenever the orientation or the partial turn changes.
#[derive(Debug, Default, Clone)]
pub(crate) struct GeometryCache {
    geometry: OnceCell<Geometry>,
    logical_faces: OnceCell<LogicalFaces>,
}

impl GeometryCache {
    pub(crate) fn geometry(
        &self,
        size: usize,
        matrix: &Matrix3,
        turn: Option<PartialTurn>,
    ) -> &Geometry {
        self.geometry.get_or_init(|| Geometry::new(size, matrix, turn))
    }

    pub(crate) fn logical_faces(&self, matrix: &Matrix3) -> &LogicalFaces {
        self.logical_faces.get_or_init(|| LogicalFaces::from_matrix(matrix))
    }

    /// Marks everything stale after the orientation changes.
    pub(crate) fn invalidate_orientation(&mut self) {
        *self = Self::default();
    }

    /// Marks sub-face geometry stale after the partial turn changes.
    pub(crate) fn invalidate_turn(&mut self) {
        self.geometry = OnceCell::new();
    }
}
