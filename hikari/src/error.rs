use strum::Display;
use thiserror::Error;

/// Required inputs of a [`Camera`](crate::camera::Camera)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CameraField {
    Location,
    Forward,
    Up,
    Distance,
    Width,
    Height,
    Resolution,
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    // Construction
    #[error("vector has zero length")]
    ZeroVector,
    #[error("radius has to be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("height has to be positive, got {0}")]
    NonPositiveHeight(f64),
    #[error("points don't define a plane")]
    DegeneratePlane,
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("polygon vertex {0} is not on the plane of the first three")]
    NonCoplanarVertex(usize),
    #[error("polygon vertices are not in convex order at vertex {0}")]
    NonConvex(usize),
    #[error("polygon has a duplicate or collinear vertex at {0}")]
    DegenerateEdge(usize),

    // Configuration
    #[error("camera is missing {0}")]
    MissingCameraField(CameraField),
    #[error("camera {0} has to be positive")]
    NonPositiveCameraField(CameraField),
    #[error("camera basis vectors have to be of unit length")]
    NonUnitBasis,
    #[error("camera basis vectors have to be orthogonal")]
    NonOrthogonalBasis,
}

impl Error {
    /// Returns `true` for errors from finalizing a camera configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingCameraField(_)
                | Error::NonPositiveCameraField(_)
                | Error::NonUnitBasis
                | Error::NonOrthogonalBasis
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
