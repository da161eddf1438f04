use super::{circle::Circle, non_empty, tube::Tube};
use crate::{
    error::{Error, Result},
    math::{align_zero, is_zero, Point3, Ray, Vec3},
};

/// A [`Tube`] cut to `height` and closed with two caps
#[derive(Clone, Debug)]
pub struct Cylinder {
    tube: Tube,
    height: f64,
    base: Circle,
    top: Circle,
}

impl Cylinder {
    /// Creates a new `Cylinder` of `radius` whose base is centered at the axis origin.
    pub fn new(radius: f64, axis: Ray, height: f64) -> Result<Self> {
        if height <= 0.0 {
            return Err(Error::NonPositiveHeight(height));
        }
        Ok(Self {
            tube: Tube::new(radius, axis)?,
            height,
            base: Circle::new(axis.o, radius, -axis.d)?,
            top: Circle::new(axis.point(height), radius, axis.d)?,
        })
    }

    pub fn axis(&self) -> Ray {
        self.tube.axis()
    }

    pub fn radius(&self) -> f64 {
        self.tube.radius()
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn normal(&self, p: Point3) -> Vec3 {
        let axis = self.tube.axis();
        if p == axis.o {
            return -axis.d;
        }

        let s = axis.d.dot(p - axis.o);
        if is_zero(s) {
            -axis.d
        } else if is_zero(s - self.height) {
            axis.d
        } else {
            self.tube.normal(p)
        }
    }

    pub fn intersect(&self, ray: Ray, max_distance: f64) -> Option<Vec<Point3>> {
        let axis = self.tube.axis();

        // Side hits only count strictly between the caps
        let mut hits: Vec<Point3> = self
            .tube
            .intersect_t(ray, max_distance)
            .into_iter()
            .map(|t| ray.point(t))
            .filter(|&p| {
                let s = align_zero(axis.d.dot(p - axis.o));
                s > 0.0 && align_zero(s - self.height) < 0.0
            })
            .collect();

        for cap in [&self.base, &self.top] {
            if let Some(cap_hits) = cap.intersect(ray, max_distance) {
                hits.extend(cap_hits);
            }
        }

        non_empty(hits)
    }
}
