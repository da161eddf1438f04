use serde::{Deserialize, Serialize};

use super::common::is_zero;
use crate::error::{Error, Result};

/// Three-component direction vector
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Shorthand constructor
pub fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

impl Vec3 {
    /// Constructs a new vector.
    ///
    /// Has a debug assert that checks for NaNs.
    pub fn new(x: f64, y: f64, z: f64) -> Vec3 {
        let v = Vec3 { x, y, z };
        debug_assert!(!v.has_nans());
        v
    }

    /// Constructs a new vector of 0s.
    pub fn zeros() -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }

    /// Returns `true` if any component is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns `true` if every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Returns the dot product of the two vectors.
    pub fn dot(&self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of the two vectors.
    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the vector's squared length.
    pub fn len_sqr(&self) -> f64 {
        self.dot(*self)
    }

    /// Returns the vector's length.
    pub fn len(&self) -> f64 {
        self.len_sqr().sqrt()
    }

    /// Returns the normalized vector.
    ///
    /// Has a debug assert that checks the vector is not degenerate.
    pub fn normalized(&self) -> Vec3 {
        debug_assert!(!is_zero(self.len_sqr()));
        *self / self.len()
    }

    /// Returns the normalized vector or [`Error::ZeroVector`] if the vector has no direction.
    pub fn try_normalized(&self) -> Result<Vec3> {
        let len = self.len();
        if is_zero(len) {
            Err(Error::ZeroVector)
        } else {
            Ok(*self / len)
        }
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl_component_op!(Add, add, +, Vec3, Vec3, Vec3, [x y z]);
impl_component_op!(Sub, sub, -, Vec3, Vec3, Vec3, [x y z]);
impl_scalar_op!(Mul, mul, *, Vec3, [x y z]);
impl_scalar_op!(Div, div, /, Vec3, [x y z]);
impl_assign_op!(AddAssign, add_assign, +, Vec3, Vec3);
impl_assign_op!(SubAssign, sub_assign, -, Vec3, Vec3);
impl_assign_op!(MulAssign, mul_assign, *, Vec3, f64);
impl_assign_op!(DivAssign, div_assign, /, Vec3, f64);
impl_approx!(Vec3, [x y z]);
