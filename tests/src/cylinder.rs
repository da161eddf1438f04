#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use hikari::{
        math::{point3, vec3, Point3, Ray},
        surfaces::Cylinder,
        Error,
    };

    fn z_cylinder() -> Cylinder {
        Cylinder::new(
            1.0,
            Ray::new(point3(0.0, 0.0, -2.0), vec3(0.0, 0.0, 1.0)),
            10.0,
        )
        .unwrap()
    }

    fn hits(c: &Cylinder, o: Point3, d: (f64, f64, f64)) -> Vec<Point3> {
        c.intersect(Ray::new(o, vec3(d.0, d.1, d.2)), f64::INFINITY)
            .unwrap_or_default()
    }

    #[test]
    fn new() {
        let axis = Ray::new(point3(0.0, 0.0, -2.0), vec3(0.0, 0.0, 1.0));
        let c = Cylinder::new(1.0, axis, 10.0).unwrap();
        assert_eq!(c.radius(), 1.0);
        assert_eq!(c.height(), 10.0);
        assert_eq!(c.axis(), axis);
        assert_eq!(
            Cylinder::new(1.0, axis, 0.0).unwrap_err(),
            Error::NonPositiveHeight(0.0)
        );
        assert_eq!(
            Cylinder::new(-1.0, axis, 1.0).unwrap_err(),
            Error::NonPositiveRadius(-1.0)
        );
    }

    #[test]
    fn normal() {
        let c = Cylinder::new(
            5.0,
            Ray::new(point3(1.0, 2.0, 3.0), vec3(0.0, 1.0, 0.0)),
            10.0,
        )
        .unwrap();
        // Side
        assert_relative_eq!(c.normal(point3(5.0, 7.0, 6.0)), vec3(0.8, 0.0, 0.6));
        // Base
        assert_eq!(c.normal(point3(2.0, 2.0, 2.0)), vec3(0.0, -1.0, 0.0));
        assert_eq!(c.normal(point3(1.0, 2.0, 3.0)), vec3(0.0, -1.0, 0.0));
        // Top
        assert_eq!(c.normal(point3(2.0, 12.0, 2.0)), vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn along_axis() {
        let c = z_cylinder();
        // Through both caps
        assert_eq!(
            hits(&c, point3(0.0, 0.0, -3.0), (0.0, 0.0, 1.0)),
            vec![point3(0.0, 0.0, -2.0), point3(0.0, 0.0, 8.0)]
        );
        // From the base center
        assert_eq!(
            hits(&c, point3(0.0, 0.0, -2.0), (0.0, 0.0, 1.0)),
            vec![point3(0.0, 0.0, 8.0)]
        );
        // From inside, downward
        assert_eq!(
            hits(&c, point3(0.0, 0.0, 2.0), (0.0, 0.0, -1.0)),
            vec![point3(0.0, 0.0, -2.0)]
        );
        // From the base center, away
        assert!(c
            .intersect(
                Ray::new(point3(0.0, 0.0, -2.0), vec3(0.0, 0.0, -1.0)),
                f64::INFINITY
            )
            .is_none());
    }

    #[test]
    fn from_base_center_to_side() {
        let c = z_cylinder();
        let h = hits(&c, point3(0.0, 0.0, -2.0), (1.0, 0.0, 1.0));
        assert_eq!(h.len(), 1);
        assert_abs_diff_eq!(h[0], point3(1.0, 0.0, -1.0), epsilon = 1e-9);
    }

    #[test]
    fn from_top_to_base() {
        let c = z_cylinder();
        let h = hits(&c, point3(0.5, 0.5, 8.0), (-0.5, -0.5, -10.0));
        assert_eq!(h.len(), 1);
        assert_abs_diff_eq!(h[0], point3(0.0, 0.0, -2.0), epsilon = 1e-9);
    }

    #[test]
    fn side() {
        let c = z_cylinder();
        let h = hits(&c, point3(-5.0, 0.0, 3.0), (1.0, 0.0, 0.0));
        assert_eq!(h.len(), 2);
        assert_abs_diff_eq!(h[0], point3(-1.0, 0.0, 3.0), epsilon = 1e-9);
        assert_abs_diff_eq!(h[1], point3(1.0, 0.0, 3.0), epsilon = 1e-9);

        // Past the caps
        assert!(hits(&c, point3(-5.0, 0.0, 9.0), (1.0, 0.0, 0.0)).is_empty());
        assert!(hits(&c, point3(-5.0, 0.0, -3.0), (1.0, 0.0, 0.0)).is_empty());
    }

    #[test]
    fn side_and_cap() {
        let c = z_cylinder();
        // In through the side, out through the top
        let h = hits(&c, point3(-2.0, 0.0, 6.0), (1.0, 0.0, 1.0));
        assert_eq!(h.len(), 2);
        assert_abs_diff_eq!(h[0], point3(-1.0, 0.0, 7.0), epsilon = 1e-9);
        assert_abs_diff_eq!(h[1], point3(0.0, 0.0, 8.0), epsilon = 1e-9);
    }

    #[test]
    fn tangent_at_cap_edge() {
        let c = z_cylinder();
        assert!(hits(&c, point3(1.0, -5.0, -2.0), (0.0, 1.0, 0.0)).is_empty());
        assert!(hits(&c, point3(1.0, -5.0, 8.0), (0.0, 1.0, 0.0)).is_empty());
    }

    #[test]
    fn parallel_outside() {
        let c = z_cylinder();
        assert!(hits(&c, point3(3.0, 0.0, -5.0), (0.0, 0.0, 1.0)).is_empty());
    }
}
