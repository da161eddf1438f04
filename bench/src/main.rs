use hikari::{
    camera::{Camera, CameraParameters},
    integrators::{Whitted, WhittedParams},
    lights::PointLight,
    material::Material,
    math::{point3, vec3, Point3, Ray, Spectrum},
    renderer::{RenderSettings, Renderer},
    scene::Scene,
    surfaces::{Cylinder, Geometry, Sphere, Surface},
};
use std::time::Instant;

const ITERATIONS: usize = 5000000;

fn bench_intersect(name: &str, geometry: &Geometry) {
    let rays = [
        Ray::new(point3(0.0, 0.0, 10.0), vec3(0.0, 0.0, -1.0)),
        Ray::new(point3(0.3, 0.2, 10.0), vec3(0.0, 0.1, -1.0)),
        Ray::new(point3(5.0, 5.0, 10.0), vec3(0.0, 0.0, -1.0)),
    ];

    let start = Instant::now();
    let mut hits = 0;
    for i in 0..ITERATIONS {
        if let Some(points) = geometry.intersect(rays[i % rays.len()], f64::INFINITY) {
            hits += points.len();
        }
    }
    if hits == 0 {
        panic!("We only wanted to force the loop to be executed!")
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let ns_per_test = (elapsed_ns as f64) / (ITERATIONS as f64);
    println!(
        "{:8} took {:6.1} ms total, {:0.2} ns per test",
        name, elapsed_ms, ns_per_test
    );
}

fn bench_render() {
    let scene = Scene::new("bench")
        .with_background(Spectrum::from(0.1))
        .with_light(PointLight::new(point3(0.0, 50.0, 50.0), Spectrum::ones()))
        .with_surface(
            Surface::new(Sphere::new(Point3::zeros(), 20.0).unwrap()).with_material(
                Material::default()
                    .with_kd(0.5)
                    .with_ks(0.5)
                    .with_shininess(30.0)
                    .with_kt(0.3),
            ),
        )
        .with_surface(
            Surface::new(
                Cylinder::new(
                    10.0,
                    Ray::new(point3(0.0, -40.0, -40.0), vec3(0.0, 1.0, 0.0)),
                    60.0,
                )
                .unwrap(),
            )
            .with_material(Material::default().with_kd(0.3).with_kr(0.6)),
        );
    let camera = Camera::new(
        CameraParameters::default()
            .location(point3(0.0, 0.0, 200.0))
            .look_at(Point3::zeros())
            .view_plane_distance(200.0)
            .view_plane_size(100.0, 100.0)
            .resolution(256, 256),
    )
    .unwrap();

    let renderer = Renderer::new(&RenderSettings::default()).unwrap();
    let result = renderer.render(&scene, &camera, &Whitted::new(WhittedParams::default()));
    println!(
        "Render   took {:6.1} ms total, {} rays",
        result.secs * 1e3,
        result.ray_scene_intersections
    );
}

fn main() {
    let sphere = Geometry::from(Sphere::new(Point3::zeros(), 1.0).unwrap());
    bench_intersect("Sphere", &sphere);

    let cylinder = Geometry::from(
        Cylinder::new(1.0, Ray::new(point3(0.0, 0.0, -1.0), vec3(0.0, 0.0, 1.0)), 2.0).unwrap(),
    );
    bench_intersect("Cylinder", &cylinder);

    bench_render();
}
