mod whitted;

pub use whitted::{Params as WhittedParams, Whitted};

use crate::{
    math::{Ray, Spectrum},
    scene::Scene,
};

pub struct RadianceResult {
    pub li: Spectrum,
    /// Number of rays tested against the scene, including shadow rays
    pub ray_scene_intersections: usize,
}

impl Default for RadianceResult {
    fn default() -> Self {
        Self {
            li: Spectrum::zeros(),
            ray_scene_intersections: 0,
        }
    }
}

pub trait Integrator: Send + Sync {
    /// Evaluates the incoming radiance along `ray`.
    fn li(&self, ray: Ray, scene: &Scene) -> RadianceResult;
}
