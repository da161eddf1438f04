mod aggregate;
mod circle;
mod cylinder;
mod plane;
mod polygon;
mod sphere;
mod tube;

pub use aggregate::Aggregate;
pub use circle::Circle;
pub use cylinder::Cylinder;
pub use plane::Plane;
pub use polygon::Polygon;
pub use sphere::Sphere;
pub use tube::Tube;

use crate::{
    material::Material,
    math::{align_zero, Point3, Ray, Spectrum, Vec3},
};

/// A point where a [`Ray`] meets a [`Surface`]
#[derive(Copy, Clone, Debug)]
pub struct Intersection<'a> {
    pub surface: &'a Surface,
    pub p: Point3,
}

pub trait Intersect: Send + Sync {
    /// Intersects `ray` with this object, accepting hits up to `max_distance` along it.
    ///
    /// Returns `None` instead of an empty `Vec` if nothing was hit.
    fn intersect(&self, ray: Ray, max_distance: f64) -> Option<Vec<Intersection<'_>>>;

    /// Intersects `ray` with this object without a distance limit.
    fn intersect_all(&self, ray: Ray) -> Option<Vec<Intersection<'_>>> {
        self.intersect(ray, f64::INFINITY)
    }
}

/// The shape of a [`Surface`]
#[derive(Clone, Debug)]
pub enum Geometry {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Polygon),
    Polygon(Polygon),
    Circle(Circle),
    Tube(Tube),
    Cylinder(Cylinder),
}

impl Geometry {
    /// Returns the unit normal at `p`, which is expected to lie on the geometry.
    pub fn normal(&self, p: Point3) -> Vec3 {
        match self {
            Geometry::Plane(g) => g.normal(p),
            Geometry::Sphere(g) => g.normal(p),
            Geometry::Triangle(g) | Geometry::Polygon(g) => g.normal(p),
            Geometry::Circle(g) => g.normal(p),
            Geometry::Tube(g) => g.normal(p),
            Geometry::Cylinder(g) => g.normal(p),
        }
    }

    /// Returns the points where `ray` hits the geometry within `max_distance`, nearest first
    /// for the primitives that produce several.
    pub fn intersect(&self, ray: Ray, max_distance: f64) -> Option<Vec<Point3>> {
        match self {
            Geometry::Plane(g) => g.intersect(ray, max_distance),
            Geometry::Sphere(g) => g.intersect(ray, max_distance),
            Geometry::Triangle(g) | Geometry::Polygon(g) => g.intersect(ray, max_distance),
            Geometry::Circle(g) => g.intersect(ray, max_distance),
            Geometry::Tube(g) => g.intersect(ray, max_distance),
            Geometry::Cylinder(g) => g.intersect(ray, max_distance),
        }
    }
}

impl From<Plane> for Geometry {
    fn from(g: Plane) -> Self {
        Geometry::Plane(g)
    }
}

impl From<Sphere> for Geometry {
    fn from(g: Sphere) -> Self {
        Geometry::Sphere(g)
    }
}

impl From<Polygon> for Geometry {
    fn from(g: Polygon) -> Self {
        if g.is_triangle() {
            Geometry::Triangle(g)
        } else {
            Geometry::Polygon(g)
        }
    }
}

impl From<Circle> for Geometry {
    fn from(g: Circle) -> Self {
        Geometry::Circle(g)
    }
}

impl From<Tube> for Geometry {
    fn from(g: Tube) -> Self {
        Geometry::Tube(g)
    }
}

impl From<Cylinder> for Geometry {
    fn from(g: Cylinder) -> Self {
        Geometry::Cylinder(g)
    }
}

/// A renderable object: [`Geometry`] with its [`Material`] and emitted light
#[derive(Clone, Debug)]
pub struct Surface {
    pub geometry: Geometry,
    pub material: Material,
    pub emission: Spectrum,
}

impl Surface {
    /// Creates a new black `Surface` with the default [`Material`].
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: geometry.into(),
            material: Material::default(),
            emission: Spectrum::zeros(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_emission(mut self, emission: Spectrum) -> Self {
        self.emission = emission;
        self
    }

    /// Returns the unit normal at `p`.
    pub fn normal(&self, p: Point3) -> Vec3 {
        self.geometry.normal(p)
    }
}

impl Intersect for Surface {
    fn intersect(&self, ray: Ray, max_distance: f64) -> Option<Vec<Intersection<'_>>> {
        let points = self.geometry.intersect(ray, max_distance)?;
        Some(
            points
                .into_iter()
                .map(|p| Intersection { surface: self, p })
                .collect(),
        )
    }
}

/// Returns `true` if ray parameter `t` is in front of the origin and no further than `max_distance`.
fn in_range(t: f64, max_distance: f64) -> bool {
    align_zero(t) > 0.0 && align_zero(t - max_distance) <= 0.0
}

fn non_empty<T>(v: Vec<T>) -> Option<Vec<T>> {
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}
