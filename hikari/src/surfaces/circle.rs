use super::plane::Plane;
use crate::{
    error::{Error, Result},
    math::{align_zero, Point3, Ray, Vec3},
};

/// A flat disk
#[derive(Clone, Debug)]
pub struct Circle {
    plane: Plane,
    radius: f64,
}

impl Circle {
    /// Creates a new `Circle` around `center` facing `n`.
    pub fn new(center: Point3, radius: f64, n: Vec3) -> Result<Self> {
        if radius <= 0.0 {
            return Err(Error::NonPositiveRadius(radius));
        }
        Ok(Self {
            plane: Plane::new(center, n)?,
            radius,
        })
    }

    pub fn center(&self) -> Point3 {
        self.plane.p()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn normal(&self, _p: Point3) -> Vec3 {
        self.plane.n()
    }

    pub fn intersect(&self, ray: Ray, max_distance: f64) -> Option<Vec<Point3>> {
        let t = self.plane.intersect_t(ray, max_distance)?;
        let p = ray.point(t);
        if align_zero(p.dist(self.center()) - self.radius) < 0.0 {
            Some(vec![p])
        } else {
            None
        }
    }
}
