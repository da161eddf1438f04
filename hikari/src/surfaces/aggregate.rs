use super::{non_empty, Intersect, Intersection, Surface};
use crate::math::Ray;

/// An ordered collection of [`Surface`]s intersected as one
#[derive(Clone, Debug, Default)]
pub struct Aggregate {
    surfaces: Vec<Surface>,
}

impl Aggregate {
    /// Creates an empty `Aggregate`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Surface> {
        self.surfaces.iter()
    }

    /// Returns the hit closest to the origin of `ray`.
    pub fn closest_intersection(&self, ray: Ray) -> Option<Intersection<'_>> {
        let hits = self.intersect_all(ray)?;
        ray.closest_intersection(&hits)
    }
}

impl Intersect for Aggregate {
    fn intersect(&self, ray: Ray, max_distance: f64) -> Option<Vec<Intersection<'_>>> {
        non_empty(
            self.surfaces
                .iter()
                .filter_map(|s| s.intersect(ray, max_distance))
                .flatten()
                .collect(),
        )
    }
}

impl From<Vec<Surface>> for Aggregate {
    fn from(surfaces: Vec<Surface>) -> Self {
        Self { surfaces }
    }
}

impl FromIterator<Surface> for Aggregate {
    fn from_iter<I: IntoIterator<Item = Surface>>(iter: I) -> Self {
        Self {
            surfaces: iter.into_iter().collect(),
        }
    }
}

impl Extend<Surface> for Aggregate {
    fn extend<I: IntoIterator<Item = Surface>>(&mut self, iter: I) {
        self.surfaces.extend(iter);
    }
}
