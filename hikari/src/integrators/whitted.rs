use super::{Integrator, RadianceResult};
use crate::{
    interaction::SurfaceInteraction,
    lights::Light,
    math::{Ray, Spectrum},
    scene::Scene,
    surfaces::Intersect,
};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Params {
    /// Levels of shading including the first hit
    pub max_depth: u32,
    /// Accumulated attenuation below which secondary rays aren't traced
    pub min_attenuation: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_depth: 10,
            min_attenuation: 0.001,
        }
    }
}

/// Recursive ray tracer with Phong shading, shadows, reflection and refraction
pub struct Whitted {
    max_depth: u32,
    min_attenuation: f64,
}

impl Whitted {
    pub fn new(params: Params) -> Self {
        Self {
            max_depth: params.max_depth,
            min_attenuation: params.min_attenuation,
        }
    }

    /// Returns the color seen along `ray`.
    pub fn trace_ray(&self, ray: Ray, scene: &Scene) -> Spectrum {
        self.li(ray, scene).li
    }

    fn color(
        &self,
        mut si: SurfaceInteraction,
        scene: &Scene,
        depth: u32,
        k: Spectrum,
        ray_count: &mut usize,
    ) -> Spectrum {
        let local = self.local_effects(&mut si, scene, ray_count);
        if depth <= 1 {
            local
        } else {
            local + self.global_effects(&si, scene, depth, k, ray_count)
        }
    }

    fn local_effects(
        &self,
        si: &mut SurfaceInteraction,
        scene: &Scene,
        ray_count: &mut usize,
    ) -> Spectrum {
        let material = si.material();
        scene.lights.iter().fold(si.surface.emission, |acc, light| {
            if !si.set_light(light.as_ref()) {
                return acc;
            }

            let ktr = self.transparency(si, light.as_ref(), scene, ray_count);
            if ktr.is_black() {
                return acc;
            }

            let diffuse = material.kd * si.ln.abs();
            let r = si.l - si.n * (2.0 * si.ln);
            let specular = material.ks * (-si.v.dot(r)).max(0.0).powf(material.shininess);

            acc + light.intensity(si.p) * ktr * (diffuse + specular)
        })
    }

    /// Returns how much of `light` makes it to the interaction through the surfaces in between.
    fn transparency(
        &self,
        si: &SurfaceInteraction,
        light: &dyn Light,
        scene: &Scene,
        ray_count: &mut usize,
    ) -> Spectrum {
        let shadow_ray = si.spawn_ray(-si.l);
        *ray_count += 1;
        let hits = match scene
            .surfaces
            .intersect(shadow_ray, light.distance(si.p))
        {
            Some(hits) => hits,
            None => return Spectrum::ones(),
        };

        let mut ktr = Spectrum::ones();
        for hit in hits {
            ktr *= hit.surface.material.kt;
            if ktr.all_below(self.min_attenuation) {
                return Spectrum::zeros();
            }
        }
        ktr
    }

    fn global_effects(
        &self,
        si: &SurfaceInteraction,
        scene: &Scene,
        depth: u32,
        k: Spectrum,
        ray_count: &mut usize,
    ) -> Spectrum {
        let material = si.material();
        let refracted = si.spawn_ray(si.v);
        let reflected = si.spawn_ray(si.v - si.n * (2.0 * si.vn));

        self.global_effect(refracted, material.kt, scene, depth, k, ray_count)
            + self.global_effect(reflected, material.kr, scene, depth, k, ray_count)
    }

    fn global_effect(
        &self,
        ray: Ray,
        kx: Spectrum,
        scene: &Scene,
        depth: u32,
        k: Spectrum,
        ray_count: &mut usize,
    ) -> Spectrum {
        let kkx = kx * k;
        if kkx.all_below(self.min_attenuation) {
            return Spectrum::zeros();
        }

        *ray_count += 1;
        match scene.surfaces.closest_intersection(ray) {
            Some(hit) => match SurfaceInteraction::new(hit, ray.d) {
                Some(si) => self.color(si, scene, depth - 1, kkx, ray_count) * kx,
                None => Spectrum::zeros(),
            },
            None => scene.background * kx,
        }
    }
}

impl Integrator for Whitted {
    fn li(&self, ray: Ray, scene: &Scene) -> RadianceResult {
        let mut ray_count = 1;
        let li = match scene.surfaces.closest_intersection(ray) {
            Some(hit) => match SurfaceInteraction::new(hit, ray.d) {
                Some(si) => {
                    scene.ambient.intensity * si.material().ka
                        + self.color(si, scene, self.max_depth, Spectrum::ones(), &mut ray_count)
                }
                // Grazing
                None => Spectrum::zeros(),
            },
            None => scene.background,
        };

        RadianceResult {
            li,
            ray_scene_intersections: ray_count,
        }
    }
}
