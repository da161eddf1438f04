#[cfg(test)]
mod tests {
    use hikari::math::Spectrum;

    #[test]
    fn new() {
        let s = Spectrum::new(0.1, 0.2, 0.3);
        assert_eq!(s.r, 0.1);
        assert_eq!(s.g, 0.2);
        assert_eq!(s.b, 0.3);
        assert_eq!(Spectrum::zeros(), Spectrum::new(0.0, 0.0, 0.0));
        assert_eq!(Spectrum::ones(), Spectrum::new(1.0, 1.0, 1.0));
        assert_eq!(Spectrum::from(0.5), Spectrum::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn ops() {
        let a = Spectrum::new(1.0, 2.0, 3.0);
        let b = Spectrum::new(0.5, 0.25, 2.0);
        assert_eq!(a + b, Spectrum::new(1.5, 2.25, 5.0));
        assert_eq!(a - b, Spectrum::new(0.5, 1.75, 1.0));
        assert_eq!(a * b, Spectrum::new(0.5, 0.5, 6.0));
        assert_eq!(a * 2.0, Spectrum::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Spectrum::new(0.5, 1.0, 1.5));

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
        c += a;
        assert_eq!(c, a * b + a);
        c *= 0.0;
        assert!(c.is_black());
    }

    #[test]
    fn all_below() {
        assert!(Spectrum::new(0.0005, 0.0009, 0.0).all_below(0.001));
        assert!(!Spectrum::new(0.0005, 0.001, 0.0).all_below(0.001));
        assert!(!Spectrum::new(0.0005, 0.0, 0.5).all_below(0.001));
        assert!(Spectrum::zeros().all_below(0.001));
    }
}
