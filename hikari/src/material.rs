use serde::{Deserialize, Serialize};

use crate::math::Spectrum;

/// Phong-style attenuation coefficients of a surface
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Material {
    /// Ambient
    pub ka: Spectrum,
    /// Diffuse
    pub kd: Spectrum,
    /// Specular
    pub ks: Spectrum,
    /// Transmission
    pub kt: Spectrum,
    /// Reflection
    pub kr: Spectrum,
    /// Specular exponent
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ka: Spectrum::ones(),
            kd: Spectrum::zeros(),
            ks: Spectrum::zeros(),
            kt: Spectrum::zeros(),
            kr: Spectrum::zeros(),
            shininess: 0.0,
        }
    }
}

impl Material {
    pub fn with_ka(mut self, ka: impl Into<Spectrum>) -> Self {
        self.ka = ka.into();
        self
    }

    pub fn with_kd(mut self, kd: impl Into<Spectrum>) -> Self {
        self.kd = kd.into();
        self
    }

    pub fn with_ks(mut self, ks: impl Into<Spectrum>) -> Self {
        self.ks = ks.into();
        self
    }

    pub fn with_kt(mut self, kt: impl Into<Spectrum>) -> Self {
        self.kt = kt.into();
        self
    }

    pub fn with_kr(mut self, kr: impl Into<Spectrum>) -> Self {
        self.kr = kr.into();
        self
    }

    pub fn with_shininess(mut self, shininess: f64) -> Self {
        self.shininess = shininess;
        self
    }
}
