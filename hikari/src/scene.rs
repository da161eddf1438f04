use crate::{
    lights::{AmbientLight, Light},
    math::Spectrum,
    surfaces::{Aggregate, Surface},
};

use std::sync::Arc;

/// Everything a render reads: surfaces, lights and the colors around them
pub struct Scene {
    pub name: String,
    pub background: Spectrum,
    pub ambient: AmbientLight,
    pub lights: Vec<Arc<dyn Light>>,
    pub surfaces: Aggregate,
}

impl Scene {
    /// Creates an empty `Scene` with black background and no ambient light.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            background: Spectrum::zeros(),
            ambient: AmbientLight::default(),
            lights: Vec::new(),
            surfaces: Aggregate::new(),
        }
    }

    pub fn with_background(mut self, background: Spectrum) -> Self {
        self.background = background;
        self
    }

    pub fn with_ambient(mut self, ambient: AmbientLight) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_light(mut self, light: impl Light + 'static) -> Self {
        self.lights.push(Arc::new(light));
        self
    }

    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surfaces.push(surface);
        self
    }

    pub fn with_surfaces(mut self, surfaces: impl IntoIterator<Item = Surface>) -> Self {
        self.surfaces.extend(surfaces);
        self
    }
}
