use super::{in_range, non_empty};
use crate::{
    error::{Error, Result},
    math::{align_zero, is_zero, Point3, Ray, Vec3},
};

/// An infinite cylindrical surface around an axis
#[derive(Clone, Debug)]
pub struct Tube {
    axis: Ray,
    radius: f64,
}

impl Tube {
    /// Creates a new `Tube` of `radius` around `axis`.
    pub fn new(radius: f64, axis: Ray) -> Result<Self> {
        if radius <= 0.0 {
            return Err(Error::NonPositiveRadius(radius));
        }
        Ok(Self { axis, radius })
    }

    pub fn axis(&self) -> Ray {
        self.axis
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn normal(&self, p: Point3) -> Vec3 {
        let s = self.axis.d.dot(p - self.axis.o);
        if is_zero(s) {
            (p - self.axis.o).normalized()
        } else {
            (p - self.axis.point(s)).normalized()
        }
    }

    pub fn intersect(&self, ray: Ray, max_distance: f64) -> Option<Vec<Point3>> {
        non_empty(
            self.intersect_t(ray, max_distance)
                .into_iter()
                .map(|t| ray.point(t))
                .collect(),
        )
    }

    /// Returns the ray parameters of the hits in ascending order.
    pub(super) fn intersect_t(&self, ray: Ray, max_distance: f64) -> Vec<f64> {
        let va = self.axis.d;
        // The axis origin and the ray origin are independent, the offset may well be zero
        let delta = ray.o - self.axis.o;

        // Solve |(o + d t - axis.o)_perp|^2 = r^2 in the plane perpendicular to the axis
        let d_perp = ray.d - va * ray.d.dot(va);
        let delta_perp = delta - va * delta.dot(va);

        let a = d_perp.len_sqr();
        // Parallel to the axis, the ray is either on the surface or never meets it
        if is_zero(a) {
            return Vec::new();
        }
        let b = 2.0 * d_perp.dot(delta_perp);
        let c = delta_perp.len_sqr() - self.radius * self.radius;

        let discriminant = align_zero(b * b - 4.0 * a * c);
        if discriminant <= 0.0 {
            return Vec::new();
        }
        let rd = discriminant.sqrt();

        [(-b - rd) / (2.0 * a), (-b + rd) / (2.0 * a)]
            .into_iter()
            .filter(|&t| in_range(t, max_distance) && ray.point(t) != ray.o)
            .collect()
    }
}
