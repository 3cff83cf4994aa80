//! 2D and 3D vector math.

use std::fmt;
use std::ops::*;

use approx::AbsDiffEq;

use crate::{EPSILON, Float};

/// Constructs a 3D vector from its components.
#[macro_export]
macro_rules! vector {
    [$x:expr, $y:expr, $z:expr $(,)?] => {
        $crate::Vector3::new($x as $crate::Float, $y as $crate::Float, $z as $crate::Float)
    };
}

/// 3D vector.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3 {
    /// X component (rightward in view space).
    pub x: Float,
    /// Y component (downward in view space).
    pub y: Float,
    /// Z component (toward the viewer in view space).
    pub z: Float,
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Vector3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Constructs a vector from its components.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [Float; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the dot product of two vectors.
    pub fn dot(self, other: Self) -> Float {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the squared magnitude of the vector.
    pub fn mag2(self) -> Float {
        self.dot(self)
    }
    /// Returns the magnitude of the vector.
    pub fn mag(self) -> Float {
        self.mag2().sqrt()
    }

    /// Returns a unit vector in the same direction, or `None` if the vector is
    /// zero.
    pub fn normalize(self) -> Option<Self> {
        let mag = self.mag();
        (mag > EPSILON).then(|| self / mag)
    }

    /// Drops the Z component.
    pub fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}
impl Mul<Float> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
impl Div<Float> for Vector3 {
    type Output = Self;

    fn div(self, rhs: Float) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_array()
            .into_iter()
            .zip(other.to_array())
            .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }
}

/// 2D vector, used for screen-space points and directions.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector2 {
    /// X component.
    pub x: Float,
    /// Y component.
    pub y: Float,
}

impl Vector2 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Constructs a vector from its components.
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Returns the dot product of two vectors.
    pub fn dot(self, other: Self) -> Float {
        self.x * other.x + self.y * other.y
    }

    /// Returns the magnitude of the vector.
    pub fn mag(self) -> Float {
        self.dot(self).sqrt()
    }

    /// Returns a unit vector in the same direction, or `None` if the vector is
    /// zero.
    pub fn normalize(self) -> Option<Self> {
        let mag = self.mag();
        (mag > EPSILON).then(|| self * (1.0 / mag))
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Mul<Float> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl AbsDiffEq for Vector2 {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_product_handedness() {
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(Vector3::Z), Vector3::X);
        assert_eq!(Vector3::Z.cross(Vector3::X), Vector3::Y);
    }

    #[test]
    fn test_normalize() {
        assert_approx_eq!(vector![3, 0, 4].normalize().unwrap(), vector![0.6, 0, 0.8]);
        assert_eq!(Vector3::ZERO.normalize(), None);
        assert_eq!(Vector2::ZERO.normalize(), None);
        assert_approx_eq!(Vector2::new(0.0, -2.0).normalize().unwrap(), Vector2::new(0.0, -1.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = vector![1, 2, 3];
        let b = vector![-1, 0.5, 2];
        assert_eq!(a + b, vector![0, 2.5, 5]);
        assert_eq!(a - b, vector![2, 1.5, 1]);
        assert_eq!(-a * 2.0, vector![-2, -4, -6]);
        assert_approx_eq!(a.dot(b), 6.0);
    }
}
