use super::{in_range, non_empty};
use crate::{
    error::{Error, Result},
    math::{align_zero, is_zero, Point3, Ray, Vec3},
};

/// A sphere surface.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if radius <= 0.0 {
            return Err(Error::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn normal(&self, p: Point3) -> Vec3 {
        (p - self.center).normalized()
    }

    pub fn intersect(&self, ray: Ray, max_distance: f64) -> Option<Vec<Point3>> {
        if ray.o == self.center {
            return if in_range(self.radius, max_distance) {
                Some(vec![ray.point(self.radius)])
            } else {
                None
            };
        }

        // Project the center on the ray and compare the perpendicular distance to the radius
        let u = self.center - ray.o;
        let tm = ray.d.dot(u);
        let d = (u.len_sqr() - tm * tm).max(0.0).sqrt();
        if align_zero(d - self.radius) >= 0.0 {
            return None;
        }

        let th = (self.radius * self.radius - d * d).sqrt();
        // Tangent
        if is_zero(th) {
            return None;
        }

        non_empty(
            [tm - th, tm + th]
                .into_iter()
                .filter(|&t| in_range(t, max_distance))
                .map(|t| ray.point(t))
                .collect(),
        )
    }
}
