use serde::{Deserialize, Serialize};

/// An RGB triple used for colors, intensities and attenuation coefficients
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Spectrum {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Spectrum {
    /// Constructs a new `Spectrum`.
    ///
    /// Has a debug assert that checks for NaNs.
    pub fn new(r: f64, g: f64, b: f64) -> Spectrum {
        let s = Spectrum { r, g, b };
        debug_assert!(!s.has_nans());
        s
    }

    /// Constructs a new black `Spectrum`.
    pub fn zeros() -> Spectrum {
        Spectrum::new(0.0, 0.0, 0.0)
    }

    /// Constructs a new `Spectrum` of 1s, the identity for component-wise products.
    pub fn ones() -> Spectrum {
        Spectrum::new(1.0, 1.0, 1.0)
    }

    /// Returns `true` if any channel is NaN.
    pub fn has_nans(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    /// Returns `true` if every channel is zero.
    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Returns `true` if every channel is strictly below `k`.
    pub fn all_below(&self, k: f64) -> bool {
        self.r < k && self.g < k && self.b < k
    }
}

impl From<f64> for Spectrum {
    fn from(v: f64) -> Spectrum {
        Spectrum::new(v, v, v)
    }
}

impl_component_op!(Add, add, +, Spectrum, Spectrum, Spectrum, [r g b]);
impl_component_op!(Sub, sub, -, Spectrum, Spectrum, Spectrum, [r g b]);
impl_component_op!(Mul, mul, *, Spectrum, Spectrum, Spectrum, [r g b]);
impl_scalar_op!(Mul, mul, *, Spectrum, [r g b]);
impl_scalar_op!(Div, div, /, Spectrum, [r g b]);
impl_assign_op!(AddAssign, add_assign, +, Spectrum, Spectrum);
impl_assign_op!(MulAssign, mul_assign, *, Spectrum, Spectrum);
impl_assign_op!(MulAssign, mul_assign, *, Spectrum, f64);
impl_approx!(Spectrum, [r g b]);
