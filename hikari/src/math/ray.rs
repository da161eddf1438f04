use super::{common::is_zero, point::Point3, vector::Vec3};
use crate::{error::Result, surfaces::Intersection};

/// Offset applied to the origin of secondary rays to move them off the spawning surface
pub const RAY_BIAS: f64 = 0.1;

/// Half-line with a normalized direction
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Origin
    pub o: Point3,
    /// Direction, always of unit length
    pub d: Vec3,
}

impl Ray {
    /// Creates a new `Ray` from `o` toward `d`. `d` is normalized.
    ///
    /// Has a debug assert that checks `d` is not degenerate.
    pub fn new(o: Point3, d: Vec3) -> Self {
        Self {
            o,
            d: d.normalized(),
        }
    }

    /// Creates a new `Ray` from `o` toward `d`, failing if `d` has no direction.
    pub fn try_new(o: Point3, d: Vec3) -> Result<Self> {
        Ok(Self {
            o,
            d: d.try_normalized()?,
        })
    }

    /// Creates a new `Ray` from surface point `p` toward `d`, offset along the surface normal `n`.
    ///
    /// The offset is taken to the side of the surface `d` points to.
    pub fn with_bias(p: Point3, d: Vec3, n: Vec3) -> Self {
        let nd = n.dot(d);
        let o = if is_zero(nd) {
            p
        } else if nd > 0.0 {
            p + n * RAY_BIAS
        } else {
            p - n * RAY_BIAS
        };
        Self::new(o, d)
    }

    /// Finds the point at distance `t` along the ray.
    pub fn point(&self, t: f64) -> Point3 {
        if is_zero(t) {
            return self.o;
        }
        let offset = self.d * t;
        // Tiny t can still collapse to a zero offset
        if offset.is_zero() {
            self.o
        } else {
            self.o + offset
        }
    }

    /// Returns the point closest to the origin of the ray or `None` if `points` is empty.
    pub fn closest_point(&self, points: &[Point3]) -> Option<Point3> {
        self.closest_by(points, |p| *p)
    }

    /// Returns the intersection closest to the origin of the ray or `None` if `hits` is empty.
    ///
    /// Ties go to the first hit in `hits`.
    pub fn closest_intersection<'a>(&self, hits: &[Intersection<'a>]) -> Option<Intersection<'a>> {
        self.closest_by(hits, |hit| hit.p)
    }

    fn closest_by<T: Copy>(&self, candidates: &[T], position: impl Fn(&T) -> Point3) -> Option<T> {
        let mut closest: Option<(T, f64)> = None;
        for c in candidates {
            let dist_sqr = self.o.dist_sqr(position(c));
            match closest {
                Some((_, closest_sqr)) if closest_sqr <= dist_sqr => {}
                _ => closest = Some((*c, dist_sqr)),
            }
        }
        closest.map(|(c, _)| c)
    }
}

impl_approx!(Ray, [o d]);
