/// Magnitude below which a value is considered zero
pub const EPSILON: f64 = 1e-10;

/// Returns `true` if `v` is within [`EPSILON`] of zero.
pub fn is_zero(v: f64) -> bool {
    v.abs() < EPSILON
}

/// Returns `v` snapped to exactly zero if it is within [`EPSILON`] of it.
pub fn align_zero(v: f64) -> f64 {
    if is_zero(v) {
        0.0
    } else {
        v
    }
}
