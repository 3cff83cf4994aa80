//! 3x3 matrix math.

use std::fmt;
use std::ops::*;

use approx::AbsDiffEq;

use crate::{EPSILON, Float, Vector3};

/// Constructs a matrix from a list of rows.
#[macro_export]
macro_rules! row_matrix {
    [$([$($n:expr),* $(,)?]),* $(,)?] => {
        $crate::Matrix3::from_rows([$([$($n as $crate::Float),*]),*])
    };
}

/// Row-major 3x3 matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix3 {
    rows: [[Float; 3]; 3],
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENT
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows {
            writeln!(f, "[{} {} {}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

impl Matrix3 {
    /// Zero matrix.
    pub const ZERO: Self = Self::from_rows([[0.0; 3]; 3]);
    /// Identity matrix.
    pub const IDENT: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Constructs a matrix from its rows.
    pub const fn from_rows(rows: [[Float; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> [[Float; 3]; 3] {
        self.rows
    }

    /// Returns the element at row `row` and column `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is at least 3.
    pub fn get(&self, row: usize, col: usize) -> Float {
        self.rows[row][col]
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let r = self.rows;
        Self::from_rows(std::array::from_fn(|i| std::array::from_fn(|j| r[j][i])))
    }

    /// Returns the determinant of the matrix.
    pub fn determinant(&self) -> Float {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Constructs a rotation of `angle` radians about `axis`, which must be a
    /// unit vector. Positive angles rotate counterclockwise when looking down
    /// the axis toward the origin.
    pub fn from_axis_angle(axis: Vector3, angle: Float) -> Self {
        let Vector3 { x, y, z } = axis;
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        Self::from_rows([
            [c + x * x * t, x * y * t - z * s, x * z * t + y * s],
            [x * y * t + z * s, c + y * y * t, y * z * t - x * s],
            [x * z * t - y * s, y * z * t + x * s, c + z * z * t],
        ])
    }

    /// Constructs a horizontal free-look rotation (about the Y axis).
    pub fn from_yaw(angle: Float) -> Self {
        let (s, c) = angle.sin_cos();
        row_matrix![[c, 0, s], [0, 1, 0], [-s, 0, c]]
    }

    /// Constructs a vertical free-look rotation (about the X axis).
    pub fn from_pitch(angle: Float) -> Self {
        let (s, c) = angle.sin_cos();
        row_matrix![[1, 0, 0], [0, c, s], [0, -s, c]]
    }

    /// Scales the matrix so that its determinant is 1, which counters
    /// accumulated floating-point drift in a rotation matrix.
    ///
    /// Singular matrices are returned unchanged.
    #[must_use]
    pub fn renormalized(&self) -> Self {
        let det = self.determinant();
        if det.abs() < EPSILON {
            return *self;
        }
        *self * (1.0 / det.cbrt())
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (self.rows, rhs.rows);
        Self::from_rows(std::array::from_fn(|i| {
            std::array::from_fn(|j| (0..3).map(|k| a[i][k] * b[k][j]).sum())
        }))
    }
}
impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        let [r0, r1, r2] = self.rows.map(|[a, b, c]| Vector3::new(a, b, c).dot(rhs));
        Vector3::new(r0, r1, r2)
    }
}
impl Mul<Float> for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self::Output {
        Self::from_rows(self.rows.map(|row| row.map(|x| x * rhs)))
    }
}

impl AbsDiffEq for Matrix3 {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_matrix_mul() {
        let a = row_matrix![[1, 2, 3], [4, 5, 6], [7, 8, 10]];
        let b = row_matrix![[0, 1, 0], [1, 0, 0], [0, 0, 1]];
        assert_eq!(a * b, row_matrix![[2, 1, 3], [5, 4, 6], [8, 7, 10]]);
        assert_eq!(a * Matrix3::IDENT, a);
        assert_eq!(a * vector![1, 0, -1], vector![-2, -2, -3]);
        assert_approx_eq!(a.determinant(), -3.0);
        assert_eq!(a.transpose().get(0, 2), 7.0);
    }

    #[test]
    fn test_axis_angle_quarter_turns() {
        let rz = Matrix3::from_axis_angle(Vector3::Z, FRAC_PI_2);
        assert_approx_eq!(rz * Vector3::X, Vector3::Y);
        assert_approx_eq!(rz * Vector3::Z, Vector3::Z);

        let rx = Matrix3::from_axis_angle(Vector3::X, FRAC_PI_2);
        assert_approx_eq!(rx * Vector3::Y, Vector3::Z);
    }

    #[test]
    fn test_free_look_matrices() {
        assert_approx_eq!(Matrix3::from_yaw(0.7), Matrix3::from_axis_angle(Vector3::Y, 0.7));
        assert_approx_eq!(Matrix3::from_pitch(0.7), Matrix3::from_axis_angle(Vector3::X, -0.7));
        assert_approx_eq!(Matrix3::from_yaw(FRAC_PI_2) * Vector3::Z, Vector3::X);
    }

    #[test]
    fn test_rotations_are_orthonormal() {
        let axis = vector![1, -2, 0.5].normalize().unwrap();
        let m = Matrix3::from_axis_angle(axis, 1.234);
        assert_approx_eq!(m.determinant(), 1.0);
        assert_approx_eq!(m * m.transpose(), Matrix3::IDENT);
        assert_approx_eq!(m * axis, axis);
    }

    #[test]
    fn test_renormalize() {
        let m = Matrix3::from_yaw(0.3) * 1.01;
        assert_approx_eq!(m.renormalized().determinant(), 1.0);
        assert_eq!(Matrix3::ZERO.renormalized(), Matrix3::ZERO);
    }
}
