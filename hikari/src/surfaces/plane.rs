use super::in_range;
use crate::{
    error::{Error, Result},
    math::{align_zero, is_zero, Point3, Ray, Vec3},
};

/// An infinite plane
#[derive(Clone, Debug)]
pub struct Plane {
    p: Point3,
    n: Vec3,
}

impl Plane {
    /// Creates a new `Plane` through `p` with the normal `n`. `n` is normalized.
    pub fn new(p: Point3, n: Vec3) -> Result<Self> {
        Ok(Self {
            p,
            n: n.try_normalized()?,
        })
    }

    /// Creates a new `Plane` through the three points.
    ///
    /// The normal follows the right hand rule for `p0`, `p1`, `p2`.
    pub fn from_points(p0: Point3, p1: Point3, p2: Point3) -> Result<Self> {
        let n = (p1 - p0)
            .cross(p2 - p0)
            .try_normalized()
            .map_err(|_| Error::DegeneratePlane)?;
        Ok(Self { p: p0, n })
    }

    /// Returns the reference point of the plane.
    pub fn p(&self) -> Point3 {
        self.p
    }

    /// Returns the unit normal of the plane.
    pub fn n(&self) -> Vec3 {
        self.n
    }

    pub fn normal(&self, _p: Point3) -> Vec3 {
        self.n
    }

    pub fn intersect(&self, ray: Ray, max_distance: f64) -> Option<Vec<Point3>> {
        self.intersect_t(ray, max_distance)
            .map(|t| vec![ray.point(t)])
    }

    /// Returns the ray parameter of the hit, if any.
    pub(super) fn intersect_t(&self, ray: Ray, max_distance: f64) -> Option<f64> {
        // Starting from the reference point leaves no direction to solve along
        if ray.o == self.p {
            return None;
        }

        let denom = self.n.dot(ray.d);
        if is_zero(denom) {
            return None;
        }

        let t = align_zero(self.n.dot(self.p - ray.o) / denom);
        if in_range(t, max_distance) {
            Some(t)
        } else {
            None
        }
    }
}
