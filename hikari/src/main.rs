use hikari::{
    camera::Camera,
    expect,
    film::Film,
    hikari_error, hikari_info, hikari_warn,
    integrators::Whitted,
    lights::{AmbientLight, SpotLight},
    material::Material,
    math::{point3, vec3, Ray, Spectrum},
    renderer::{RenderResult, Renderer},
    scene::Scene,
    settings::Settings,
    surfaces::{Cylinder, Polygon, Sphere, Surface},
};

use std::path::Path;

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        // .level(log::LevelFilter::Debug)
        // .level(log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("hikari.log")?)
        .apply()?;
    Ok(())
}

fn demo_scene() -> hikari::Result<Scene> {
    let floor = Material::default()
        .with_kd(0.5)
        .with_ks(0.5)
        .with_shininess(60.0);

    Ok(Scene::new("demo")
        .with_ambient(AmbientLight::new(Spectrum::ones(), 0.15))
        .with_surfaces([
            Surface::new(Polygon::triangle(
                point3(-150.0, -150.0, -115.0),
                point3(150.0, -150.0, -135.0),
                point3(75.0, 75.0, -150.0),
            )?)
            .with_material(floor),
            Surface::new(Polygon::triangle(
                point3(-150.0, -150.0, -115.0),
                point3(-70.0, 70.0, -140.0),
                point3(75.0, 75.0, -150.0),
            )?)
            .with_material(floor),
            Surface::new(Sphere::new(point3(60.0, 50.0, -50.0), 30.0)?)
                .with_emission(Spectrum::new(0.0, 0.0, 0.4))
                .with_material(
                    Material::default()
                        .with_kd(0.2)
                        .with_ks(0.2)
                        .with_shininess(30.0)
                        .with_kt(0.6),
                ),
            Surface::new(Cylinder::new(
                20.0,
                Ray::new(point3(-60.0, -60.0, -100.0), vec3(0.0, 1.0, 0.0)),
                60.0,
            )?)
            .with_emission(Spectrum::new(0.3, 0.1, 0.1))
            .with_material(
                Material::default()
                    .with_kd(0.4)
                    .with_ks(0.3)
                    .with_shininess(20.0)
                    .with_kr(0.3),
            ),
        ])
        .with_light(
            SpotLight::new(
                point3(60.0, 50.0, 0.0),
                Spectrum::new(2.7, 1.6, 1.6),
                vec3(0.0, 0.0, -1.0),
            )?
            .with_attenuation(1.0, 4e-5, 2e-7),
        ))
}

fn write_exr(film: &Film, path: &Path) -> Result<(), String> {
    hikari_info!("Writing out EXR");
    let width = film.res().columns;
    let pixels = film.pixels();
    match exr::prelude::write_rgb_file(path, width, film.res().rows, |x, y| {
        let px = pixels[y * width + x];
        (px.r as f32, px.g as f32, px.b as f32)
    }) {
        Ok(_) => {
            hikari_info!("EXR written to '{}'", path.to_string_lossy());
            Ok(())
        }
        Err(why) => Err(format!(
            "Error writing EXR to '{}': {:?}",
            path.to_string_lossy(),
            why
        )),
    }
}

fn main() {
    if let Err(why) = setup_logger() {
        panic!("{}", why);
    };

    let settings = match std::env::args().nth(1) {
        Some(path) => expect!(Settings::load(Path::new(&path)), "Failed to load settings"),
        None => Settings::default(),
    };

    let scene = expect!(demo_scene(), "Failed to build scene");
    let camera = expect!(Camera::new(settings.camera), "Invalid camera");
    let integrator = Whitted::new(settings.whitted);
    let renderer = expect!(Renderer::new(&settings.render), "Failed to create renderer");

    let RenderResult { mut film, .. } = renderer.render(&scene, &camera, &integrator);
    if let Some(grid) = settings.grid {
        if grid.interval == 0 {
            hikari_warn!("Grid interval is 0, skipping grid");
        }
        film.print_grid(grid.interval, grid.color);
    }

    if let Err(why) = write_exr(&film, &settings.output) {
        hikari_error!("{}", why);
        std::process::exit(1);
    }
}
