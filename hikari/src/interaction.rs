use crate::{
    lights::Light,
    material::Material,
    math::{align_zero, Point3, Ray, Vec3},
    surfaces::{Intersection, Surface},
};

/// An [`Intersection`] with the geometry needed for shading it
#[derive(Copy, Clone, Debug)]
pub struct SurfaceInteraction<'a> {
    pub surface: &'a Surface,
    /// World position
    pub p: Point3,
    /// Direction of the incoming ray
    pub v: Vec3,
    /// Surface normal
    pub n: Vec3,
    pub vn: f64,
    /// Direction from the current light, see [`SurfaceInteraction::set_light`]
    pub l: Vec3,
    pub ln: f64,
}

impl<'a> SurfaceInteraction<'a> {
    /// Creates a new `SurfaceInteraction` for `hit` seen along `v`.
    ///
    /// Returns `None` if `v` grazes the surface.
    pub fn new(hit: Intersection<'a>, v: Vec3) -> Option<Self> {
        let n = hit.surface.normal(hit.p);
        let vn = align_zero(v.dot(n));
        if vn == 0.0 {
            return None;
        }

        Some(Self {
            surface: hit.surface,
            p: hit.p,
            v,
            n,
            vn,
            l: Vec3::zeros(),
            ln: 0.0,
        })
    }

    pub fn material(&self) -> &'a Material {
        &self.surface.material
    }

    /// Points the interaction at `light`.
    ///
    /// Returns `true` if the light reaches the side of the surface that is being viewed.
    pub fn set_light(&mut self, light: &dyn Light) -> bool {
        self.l = light.direction(self.p);
        self.ln = align_zero(self.l.dot(self.n));
        self.ln * self.vn > 0.0
    }

    /// Spawns a ray from the `SurfaceInteraction` toward `d`.
    pub fn spawn_ray(&self, d: Vec3) -> Ray {
        Ray::with_bias(self.p, d, self.n)
    }
}
