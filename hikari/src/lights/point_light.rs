use super::Light;
use crate::math::{Point3, Spectrum, Vec3};

/// Omnidirectional light with distance attenuation
pub struct PointLight {
    p: Point3,
    i: Spectrum,
    kc: f64,
    kl: f64,
    kq: f64,
}

impl PointLight {
    /// Creates a new `PointLight` at `p` with intensity `i` and no distance falloff.
    pub fn new(p: Point3, i: Spectrum) -> Self {
        Self {
            p,
            i,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
        }
    }

    /// Sets the constant, linear and quadratic distance attenuation factors.
    pub fn with_attenuation(mut self, kc: f64, kl: f64, kq: f64) -> Self {
        self.kc = kc;
        self.kl = kl;
        self.kq = kq;
        self
    }

    pub fn position(&self) -> Point3 {
        self.p
    }
}

impl Light for PointLight {
    fn intensity(&self, p: Point3) -> Spectrum {
        let dist_sqr = self.p.dist_sqr(p);
        self.i / (self.kc + self.kl * dist_sqr.sqrt() + self.kq * dist_sqr)
    }

    fn direction(&self, p: Point3) -> Vec3 {
        // Zero at the light itself, which gives no shading contribution
        (p - self.p).try_normalized().unwrap_or_default()
    }

    fn distance(&self, p: Point3) -> f64 {
        self.p.dist(p)
    }
}
