use serde::{Deserialize, Serialize};

use crate::math::Spectrum;

/// Constant light reaching every point from every direction
///
/// The default is black, i.e. no ambient light.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AmbientLight {
    pub intensity: Spectrum,
}

impl AmbientLight {
    /// Creates a new `AmbientLight` of intensity `i` scaled by `ka`.
    pub fn new(i: Spectrum, ka: impl Into<Spectrum>) -> Self {
        Self {
            intensity: i * ka.into(),
        }
    }
}
