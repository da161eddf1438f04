use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    camera::Camera,
    film::Film,
    hikari_debug, hikari_info, hikari_trace,
    integrators::{Integrator, RadianceResult},
    scene::Scene,
};

use std::time::Instant;

#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Worker thread count, all logical cores if not set
    pub threads: Option<usize>,
}

pub struct RenderResult {
    pub film: Film,
    pub secs: f32,
    pub ray_scene_intersections: usize,
}

/// Traces a full frame in parallel, one [`Film`] row per task
pub struct Renderer {
    pool: rayon::ThreadPool,
}

impl Renderer {
    pub fn new(settings: &RenderSettings) -> Result<Self, rayon::ThreadPoolBuildError> {
        let threads = settings.threads.unwrap_or_else(num_cpus::get);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("hikari render {}", i))
            .build()?;
        hikari_debug!("Render pool with {} threads", threads);
        Ok(Self { pool })
    }

    /// Renders `scene` as seen by `camera` at the camera's resolution.
    pub fn render(
        &self,
        scene: &Scene,
        camera: &Camera,
        integrator: &dyn Integrator,
    ) -> RenderResult {
        let res = camera.resolution();
        hikari_info!(
            "Rendering '{}' at {}x{}",
            scene.name,
            res.columns,
            res.rows
        );

        let render_start = Instant::now();
        let mut film = Film::new(res);
        let ray_scene_intersections = self.pool.install(|| {
            film.pixels_mut()
                .par_chunks_mut(res.columns)
                .enumerate()
                .map(|(row, pixels)| {
                    let mut row_rays = 0;
                    for (col, pixel) in pixels.iter_mut().enumerate() {
                        let RadianceResult {
                            li,
                            ray_scene_intersections,
                        } = integrator.li(camera.ray(col, row), scene);
                        *pixel = li;
                        row_rays += ray_scene_intersections;
                    }
                    hikari_trace!("Row {} done", row);
                    row_rays
                })
                .sum::<usize>()
        });
        let secs = render_start.elapsed().as_secs_f32();

        hikari_info!("Render finished in {:.2}s", secs);
        hikari_info!(
            "{:.2}M rays/s",
            (ray_scene_intersections as f32 / secs.max(f32::EPSILON)) * 1e-6
        );

        RenderResult {
            film,
            secs,
            ray_scene_intersections,
        }
    }
}
