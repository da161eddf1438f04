use serde::{Deserialize, Serialize};

use super::vector::Vec3;

/// Three-component position
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Shorthand constructor
pub fn point3(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

impl Point3 {
    /// Constructs a new point.
    ///
    /// Has a debug assert that checks for NaNs.
    pub fn new(x: f64, y: f64, z: f64) -> Point3 {
        let p = Point3 { x, y, z };
        debug_assert!(!p.has_nans());
        p
    }

    /// Constructs a new point at the origin.
    pub fn zeros() -> Point3 {
        Point3::new(0.0, 0.0, 0.0)
    }

    /// Returns `true` if any component is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns the squared distance between the two points.
    pub fn dist_sqr(&self, other: Point3) -> f64 {
        (*self - other).len_sqr()
    }

    /// Returns the distance between the two points.
    pub fn dist(&self, other: Point3) -> f64 {
        (*self - other).len()
    }
}

impl_component_op!(Sub, sub, -, Point3, Point3, Vec3, [x y z]);
impl_component_op!(Add, add, +, Point3, Vec3, Point3, [x y z]);
impl_component_op!(Sub, sub, -, Point3, Vec3, Point3, [x y z]);
impl_assign_op!(AddAssign, add_assign, +, Point3, Vec3);
impl_assign_op!(SubAssign, sub_assign, -, Point3, Vec3);
impl_approx!(Point3, [x y z]);
