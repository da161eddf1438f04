#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};

    use hikari::{
        math::{point3, vec3, Point3, Ray, Vec3, RAY_BIAS},
        surfaces::{Intersection, Sphere, Surface},
        Error,
    };

    #[test]
    fn new() {
        let o = point3(1.0, 2.0, 3.0);
        let r = Ray::new(o, vec3(0.0, 3.0, 4.0));
        assert_eq!(r.o, o);
        assert_relative_eq!(r.d, vec3(0.0, 0.6, 0.8));

        let r = Ray::try_new(o, vec3(0.0, 0.0, 2.0)).unwrap();
        assert_eq!(r.d, vec3(0.0, 0.0, 1.0));
        assert_eq!(Ray::try_new(o, Vec3::zeros()), Err(Error::ZeroVector));
    }

    #[test]
    fn with_bias() {
        let p = point3(0.0, 0.0, 1.0);
        let n = vec3(0.0, 0.0, 1.0);

        // Leaving the surface
        let r = Ray::with_bias(p, vec3(0.0, 1.0, 1.0), n);
        assert_relative_eq!(r.o, point3(0.0, 0.0, 1.0 + RAY_BIAS));
        assert_relative_eq!(r.d, vec3(0.0, 1.0, 1.0).normalized());

        // Entering the surface
        let r = Ray::with_bias(p, vec3(0.0, 0.0, -1.0), n);
        assert_relative_eq!(r.o, point3(0.0, 0.0, 1.0 - RAY_BIAS));

        // Along the surface
        let r = Ray::with_bias(p, vec3(1.0, 0.0, 0.0), n);
        assert_eq!(r.o, p);
    }

    #[test]
    fn point() {
        let o = point3(1.0, 2.0, 3.0);
        let r = Ray::new(o, vec3(1.0, 0.0, 0.0));
        assert_eq!(r.point(0.0), o);
        assert_eq!(r.point(1e-12), o);
        assert_eq!(r.point(1.0), point3(2.0, 2.0, 3.0));
        assert_eq!(r.point(-2.0), point3(-1.0, 2.0, 3.0));
    }

    #[test]
    fn closest_point() {
        let r = Ray::new(Point3::zeros(), vec3(1.0, 0.0, 0.0));
        assert_eq!(r.closest_point(&[]), None);

        // Squared distances 9, 1, 4
        let points = [
            point3(3.0, 0.0, 0.0),
            point3(1.0, 0.0, 0.0),
            point3(2.0, 0.0, 0.0),
        ];
        assert_eq!(r.closest_point(&points), Some(point3(1.0, 0.0, 0.0)));

        // Ties go to the first one
        let points = [point3(0.0, 1.0, 0.0), point3(1.0, 0.0, 0.0)];
        assert_eq!(r.closest_point(&points), Some(point3(0.0, 1.0, 0.0)));
    }

    #[test]
    fn closest_intersection() {
        let surface = Surface::new(Sphere::new(Point3::zeros(), 5.0).unwrap());
        let r = Ray::new(Point3::zeros(), vec3(0.0, 0.0, 1.0));
        assert!(r.closest_intersection(&[]).is_none());

        let hits = [
            Intersection {
                surface: &surface,
                p: point3(0.0, 0.0, 3.0),
            },
            Intersection {
                surface: &surface,
                p: point3(0.0, 0.0, 1.0),
            },
            Intersection {
                surface: &surface,
                p: point3(0.0, 0.0, 2.0),
            },
        ];
        let closest = r.closest_intersection(&hits).unwrap();
        assert_eq!(closest.p, point3(0.0, 0.0, 1.0));
        assert!(std::ptr::eq(closest.surface, &surface));
    }

    #[test]
    fn approx() {
        let r = Ray::new(point3(1.0, 2.0, 3.0), vec3(1.0, 0.0, 0.0));
        let rc = r;
        assert_abs_diff_eq!(r, rc);
        assert_abs_diff_ne!(r, Ray::new(point3(1.0, 2.0, 4.0), vec3(1.0, 0.0, 0.0)));
        assert_abs_diff_ne!(r, Ray::new(point3(1.0, 2.0, 3.0), vec3(0.0, 1.0, 0.0)));
    }
}
