use itertools::Itertools;

use super::plane::Plane;
use crate::{
    error::{Error, Result},
    math::{align_zero, is_zero, Point3, Ray, Vec3},
};

/// A convex planar polygon
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
}

impl Polygon {
    /// Creates a new `Polygon` from vertices listed in edge order.
    ///
    /// The vertices have to lie on one plane and form a convex polygon with no repeated or
    /// collinear consecutive vertices. The normal follows the right hand rule for the first
    /// three vertices.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::TooFewVertices(vertices.len()));
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        if vertices.len() == 3 {
            return Ok(Self { vertices, plane });
        }

        let n = plane.n();
        let v0 = vertices[0];
        for (i, v) in vertices.iter().enumerate().skip(3) {
            if !is_zero((*v - v0).dot(n)) {
                return Err(Error::NonCoplanarVertex(i));
            }
        }

        // Every corner has to turn the same way around the normal
        let mut turns_positive = None;
        for (i, (a, b, c)) in vertices
            .iter()
            .circular_tuple_windows::<(_, _, _)>()
            .enumerate()
        {
            let corner = (i + 1) % vertices.len();
            let turn = (*b - *a).cross(*c - *b);
            if is_zero(turn.len_sqr()) {
                return Err(Error::DegenerateEdge(corner));
            }

            let positive = turn.dot(n) > 0.0;
            match turns_positive {
                None => turns_positive = Some(positive),
                Some(expected) if expected != positive => return Err(Error::NonConvex(corner)),
                _ => (),
            }
        }

        // Consistent turns still allow a star that winds around more than once, so every
        // vertex also has to be strictly inside every edge it isn't on
        let positive = turns_positive == Some(true);
        let count = vertices.len();
        for (i, (a, b)) in vertices
            .iter()
            .circular_tuple_windows::<(_, _)>()
            .enumerate()
        {
            let edge = *b - *a;
            for (j, v) in vertices.iter().enumerate() {
                if j == i || j == (i + 1) % count {
                    continue;
                }
                let side = align_zero(edge.cross(*v - *a).dot(n));
                if side == 0.0 || (side > 0.0) != positive {
                    return Err(Error::NonConvex(j));
                }
            }
        }

        Ok(Self { vertices, plane })
    }

    /// Creates a new triangle `Polygon`.
    pub fn triangle(p0: Point3, p1: Point3, p2: Point3) -> Result<Self> {
        Self::new(vec![p0, p1, p2])
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }

    pub fn normal(&self, _p: Point3) -> Vec3 {
        self.plane.n()
    }

    pub fn intersect(&self, ray: Ray, max_distance: f64) -> Option<Vec<Point3>> {
        let t = self.plane.intersect_t(ray, max_distance)?;

        // The hit is inside if it's on the same side of every edge as seen from the ray origin.
        // Edges and vertices themselves count as outside.
        let to_vertices: Vec<Vec3> = self.vertices.iter().map(|&v| v - ray.o).collect();
        let mut sign = 0.0;
        for (a, b) in to_vertices.iter().circular_tuple_windows::<(_, _)>() {
            let s = align_zero(a.cross(*b).dot(ray.d));
            if s == 0.0 || s * sign < 0.0 {
                return None;
            }
            sign = s;
        }

        Some(vec![ray.point(t)])
    }
}
