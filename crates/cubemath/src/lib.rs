//! Three-dimensional vector and rotation matrix primitives.

pub use approx;

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

#[macro_use]
mod vector;
#[macro_use]
pub mod matrix;

/// Structs, traits, and constants.
pub mod prelude {
    pub use approx::AbsDiffEq;

    pub use crate::matrix::*;
    pub use crate::vector::*;
    pub use crate::{EPSILON, Float, row_matrix, vector};
}
pub use prelude::*;
