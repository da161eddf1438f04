use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    camera::CameraParameters,
    film::GridSettings,
    hikari_info,
    integrators::WhittedParams,
    math::point3,
    renderer::RenderSettings,
};

use std::{
    fs::File,
    path::{Path, PathBuf},
};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Settings for a headless render
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Fields left out are taken from the default camera
    #[serde(deserialize_with = "camera_over_default")]
    pub camera: CameraParameters,
    pub whitted: WhittedParams,
    pub render: RenderSettings,
    pub grid: Option<GridSettings>,
    /// Path of the written EXR
    pub output: PathBuf,
}

fn default_camera() -> CameraParameters {
    CameraParameters::default()
        .location(point3(0.0, 0.0, 1000.0))
        .look_at(point3(0.0, 0.0, 0.0))
        .view_plane_distance(1000.0)
        .view_plane_size(200.0, 200.0)
        .resolution(600, 600)
}

fn camera_over_default<'de, D>(deserializer: D) -> std::result::Result<CameraParameters, D::Error>
where
    D: Deserializer<'de>,
{
    let camera = CameraParameters::deserialize(deserializer)?;
    Ok(camera.or(default_camera()))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            camera: default_camera(),
            whitted: WhittedParams::default(),
            render: RenderSettings::default(),
            grid: None,
            output: PathBuf::from("hikari.exr"),
        }
    }
}

impl Settings {
    /// Loads `Settings` from a YAML file. Missing fields, including the ones missing from the
    /// `camera` section, are filled from the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        hikari_info!("Loading settings from '{}'", path.to_string_lossy());
        let file = File::open(path)?;
        let settings = serde_yaml::from_reader(file)?;
        Ok(settings)
    }
}
