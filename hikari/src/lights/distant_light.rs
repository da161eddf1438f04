use super::Light;
use crate::{
    error::Result,
    math::{Point3, Spectrum, Vec3},
};

/// Light arriving along one direction from infinitely far away
pub struct DistantLight {
    i: Spectrum,
    d: Vec3,
}

impl DistantLight {
    /// Creates a new `DistantLight` with intensity `i` travelling along `d`.
    pub fn new(i: Spectrum, d: Vec3) -> Result<Self> {
        Ok(Self {
            i,
            d: d.try_normalized()?,
        })
    }
}

impl Light for DistantLight {
    fn intensity(&self, _p: Point3) -> Spectrum {
        self.i
    }

    fn direction(&self, _p: Point3) -> Vec3 {
        self.d
    }

    fn distance(&self, _p: Point3) -> f64 {
        f64::INFINITY
    }
}
