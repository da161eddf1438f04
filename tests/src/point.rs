#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};

    use hikari::math::{point3, vec3, Point3};

    #[test]
    fn new() {
        let p = Point3::new(0.0, 1.0, 2.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 1.0);
        assert_eq!(p.z, 2.0);
        assert_eq!(point3(0.0, 1.0, 2.0), p);
        assert_eq!(Point3::zeros(), point3(0.0, 0.0, 0.0));
    }

    #[test]
    fn ops() {
        let p = point3(1.0, 2.0, 3.0);
        let v = vec3(4.0, 5.0, 6.0);
        assert_eq!(p + v, point3(5.0, 7.0, 9.0));
        assert_eq!(p - v, point3(-3.0, -3.0, -3.0));
        assert_eq!(point3(5.0, 7.0, 9.0) - p, v);

        let mut q = p;
        q += v;
        assert_eq!(q, p + v);
        q -= v;
        assert_eq!(q, p);
    }

    #[test]
    fn dist() {
        let p = point3(1.0, 2.0, 3.0);
        let q = point3(3.0, 5.0, 9.0);
        assert_eq!(p.dist_sqr(q), 49.0);
        assert_eq!(p.dist(q), 7.0);
        assert_eq!(q.dist(p), 7.0);
        assert_eq!(p.dist(p), 0.0);
    }

    #[test]
    fn approx() {
        let p = point3(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(p, p);
        assert_abs_diff_ne!(p, point3(1.0, 2.0, 3.5));
        assert_relative_eq!(p, point3(1.0 + 1e-15, 2.0, 3.0), max_relative = 1e-12);
    }
}
