use super::{Light, PointLight};
use crate::{
    error::Result,
    math::{Point3, Spectrum, Vec3},
};

/// A [`PointLight`] focused along a direction
pub struct SpotLight {
    point: PointLight,
    d: Vec3,
    narrow_beam: f64,
}

impl SpotLight {
    /// Creates a new `SpotLight` at `p` with intensity `i` pointing along `d`.
    pub fn new(p: Point3, i: Spectrum, d: Vec3) -> Result<Self> {
        Ok(Self {
            point: PointLight::new(p, i),
            d: d.try_normalized()?,
            narrow_beam: 1.0,
        })
    }

    /// Sets the constant, linear and quadratic distance attenuation factors.
    pub fn with_attenuation(mut self, kc: f64, kl: f64, kq: f64) -> Self {
        self.point = self.point.with_attenuation(kc, kl, kq);
        self
    }

    /// Sets the exponent applied to the beam falloff. Larger values give a tighter beam.
    pub fn with_narrow_beam(mut self, narrow_beam: f64) -> Self {
        self.narrow_beam = narrow_beam;
        self
    }
}

impl Light for SpotLight {
    fn intensity(&self, p: Point3) -> Spectrum {
        let falloff = self.d.dot(self.point.direction(p)).max(0.0);
        self.point.intensity(p) * falloff.powf(self.narrow_beam)
    }

    fn direction(&self, p: Point3) -> Vec3 {
        self.point.direction(p)
    }

    fn distance(&self, p: Point3) -> f64 {
        self.point.distance(p)
    }
}
