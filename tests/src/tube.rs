#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use hikari::{
        math::{point3, vec3, Ray},
        surfaces::Tube,
        Error,
    };

    fn z_tube() -> Tube {
        Tube::new(1.0, Ray::new(point3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0))).unwrap()
    }

    #[test]
    fn new() {
        let axis = Ray::new(point3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0));
        let t = Tube::new(2.0, axis).unwrap();
        assert_eq!(t.radius(), 2.0);
        assert_eq!(t.axis(), axis);
        assert_eq!(
            Tube::new(0.0, axis).unwrap_err(),
            Error::NonPositiveRadius(0.0)
        );
    }

    #[test]
    fn normal() {
        let t = Tube::new(5.0, Ray::new(point3(1.0, 2.0, 3.0), vec3(0.0, 1.0, 0.0))).unwrap();
        assert_relative_eq!(t.normal(point3(5.0, 7.0, 6.0)), vec3(0.8, 0.0, 0.6));
        // Level with the axis origin
        assert_relative_eq!(t.normal(point3(5.0, 2.0, 6.0)), vec3(0.8, 0.0, 0.6));
    }

    #[test]
    fn two_hits() {
        let t = z_tube();
        let r = Ray::new(point3(-6.0, 0.0, 1.0), vec3(1.0, -0.1, 0.0));
        let hits = t.intersect(r, f64::INFINITY).unwrap();
        assert_eq!(hits.len(), 2);
        assert_abs_diff_eq!(
            hits[0],
            point3(-0.857649282009763, -0.514235071799024, 1.0),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            hits[1],
            point3(0.738837400821645, -0.673883740082165, 1.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn from_axis_origin() {
        let t = z_tube();
        let r = Ray::new(point3(0.0, 0.0, 1.0), vec3(1.0, 0.0, 1.0));
        let hits = t.intersect(r, f64::INFINITY).unwrap();
        assert_eq!(hits.len(), 1);
        assert_abs_diff_eq!(hits[0], point3(1.0, 0.0, 2.0), epsilon = 1e-9);
    }

    #[test]
    fn from_inside() {
        let t = z_tube();
        let r = Ray::new(point3(0.5, 0.0, 5.0), vec3(1.0, 0.0, 0.0));
        let hits = t.intersect(r, f64::INFINITY).unwrap();
        assert_eq!(hits.len(), 1);
        assert_abs_diff_eq!(hits[0], point3(1.0, 0.0, 5.0), epsilon = 1e-9);
    }

    #[test]
    fn from_surface() {
        let t = z_tube();
        // Inward
        let r = Ray::new(point3(1.0, 0.0, 1.0), vec3(-1.0, 0.0, 0.0));
        let hits = t.intersect(r, f64::INFINITY).unwrap();
        assert_eq!(hits.len(), 1);
        assert_abs_diff_eq!(hits[0], point3(-1.0, 0.0, 1.0), epsilon = 1e-9);
        // Outward
        let r = Ray::new(point3(1.0, 0.0, 1.0), vec3(1.0, 0.0, 0.0));
        assert!(t.intersect(r, f64::INFINITY).is_none());
    }

    #[test]
    fn parallel() {
        let t = z_tube();
        // Along the axis
        let r = Ray::new(point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        assert!(t.intersect(r, f64::INFINITY).is_none());
        // Outside
        let r = Ray::new(point3(3.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0));
        assert!(t.intersect(r, f64::INFINITY).is_none());
        // On the surface
        let r = Ray::new(point3(1.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        assert!(t.intersect(r, f64::INFINITY).is_none());
    }

    #[test]
    fn misses() {
        let t = z_tube();
        // Tangent
        let r = Ray::new(point3(-5.0, 1.0, 0.0), vec3(1.0, 0.0, 0.0));
        assert!(t.intersect(r, f64::INFINITY).is_none());
        // Pointing away
        let r = Ray::new(point3(5.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
        assert!(t.intersect(r, f64::INFINITY).is_none());
        // Passing by
        let r = Ray::new(point3(-5.0, 2.0, 0.0), vec3(1.0, 0.0, 0.3));
        assert!(t.intersect(r, f64::INFINITY).is_none());
    }

    #[test]
    fn max_distance() {
        let t = z_tube();
        let r = Ray::new(point3(-3.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
        assert_eq!(t.intersect(r, 3.0).map(|h| h.len()), Some(1));
        assert_eq!(t.intersect(r, 5.0).map(|h| h.len()), Some(2));
        assert!(t.intersect(r, 1.0).is_none());
    }
}
