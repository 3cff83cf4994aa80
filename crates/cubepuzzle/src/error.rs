use thiserror::Error;

/// Error produced when constructing a cube or validating a slice.
///
/// Rejected operations never partially mutate the cube.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum CubeError {
    #[error("cube size must be at least 1 (got {0})")]
    InvalidSize(usize),
    #[error("slice depth {depth} is out of range for a cube of size {size}")]
    DepthOutOfRange { depth: usize, size: usize },
    #[error("face index {0} is out of range (expected 0 to 5)")]
    FaceOutOfRange(u8),
    #[error("unknown face {0:?}")]
    UnknownFace(String),
}
