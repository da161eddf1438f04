use serde::{Deserialize, Serialize};

use crate::{
    error::{CameraField, Error, Result},
    film::Resolution,
    math::{is_zero, vec3, Point3, Ray, Vec3},
};

/// Configuration of a [`Camera`]
///
/// Everything is optional here and checked when the camera is created. Direction can be given
/// either as `forward` and `up` or as a `target` to look at.
#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraParameters {
    pub location: Option<Point3>,
    pub target: Option<Point3>,
    pub forward: Option<Vec3>,
    pub up: Option<Vec3>,
    pub right: Option<Vec3>,
    /// Distance from `location` to the view plane
    pub distance: Option<f64>,
    /// View plane width
    pub width: Option<f64>,
    /// View plane height
    pub height: Option<f64>,
    pub resolution: Option<Resolution>,
}

impl CameraParameters {
    pub fn location(mut self, p: Point3) -> Self {
        self.location = Some(p);
        self
    }

    /// Sets the view direction from explicit basis vectors. Both are normalized.
    pub fn direction(mut self, forward: Vec3, up: Vec3) -> Result<Self> {
        self.forward = Some(forward.try_normalized()?);
        self.up = Some(up.try_normalized()?);
        self.target = None;
        Ok(self)
    }

    /// Sets the view direction toward `target` with world +Y as the reference up.
    pub fn look_at(mut self, target: Point3) -> Self {
        self.target = Some(target);
        self.forward = None;
        self.up = None;
        self
    }

    /// Sets the view direction toward `target` with `up` as the reference up. The final up is
    /// `up` made orthogonal to the view direction.
    pub fn look_at_with_up(self, target: Point3, up: Vec3) -> Result<Self> {
        let mut params = self.look_at(target);
        params.up = Some(up.try_normalized()?);
        Ok(params)
    }

    /// Fills every field that isn't set from `fallback`.
    pub fn or(self, fallback: CameraParameters) -> Self {
        Self {
            location: self.location.or(fallback.location),
            target: self.target.or(fallback.target),
            forward: self.forward.or(fallback.forward),
            up: self.up.or(fallback.up),
            right: self.right.or(fallback.right),
            distance: self.distance.or(fallback.distance),
            width: self.width.or(fallback.width),
            height: self.height.or(fallback.height),
            resolution: self.resolution.or(fallback.resolution),
        }
    }

    pub fn view_plane_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn view_plane_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn resolution(mut self, columns: usize, rows: usize) -> Self {
        self.resolution = Some(Resolution::new(columns, rows));
        self
    }
}

/// A pinhole camera shooting rays through the pixel centers of its view plane
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    location: Point3,
    forward: Vec3,
    up: Vec3,
    right: Vec3,
    distance: f64,
    width: f64,
    height: f64,
    res: Resolution,
}

impl Camera {
    /// Creates a new `Camera` from `params`, checking that they describe a valid view.
    pub fn new(params: CameraParameters) -> Result<Self> {
        let location = params
            .location
            .ok_or(Error::MissingCameraField(CameraField::Location))?;

        let (forward, up) = match (params.forward, params.target) {
            (Some(forward), _) => (
                forward,
                params.up.ok_or(Error::MissingCameraField(CameraField::Up))?,
            ),
            (None, Some(target)) => look_at(location, target, params.up)?,
            (None, None) => return Err(Error::MissingCameraField(CameraField::Forward)),
        };

        let distance = positive(params.distance, CameraField::Distance)?;
        let width = positive(params.width, CameraField::Width)?;
        let height = positive(params.height, CameraField::Height)?;
        let res = match params.resolution {
            Some(res) if res.columns > 0 && res.rows > 0 => res,
            Some(_) => return Err(Error::NonPositiveCameraField(CameraField::Resolution)),
            None => return Err(Error::MissingCameraField(CameraField::Resolution)),
        };

        let right = match params.right {
            Some(right) => right,
            None => forward
                .cross(up)
                .try_normalized()
                .map_err(|_| Error::NonOrthogonalBasis)?,
        };

        if [forward, up, right]
            .iter()
            .any(|v| !is_zero(v.len() - 1.0))
        {
            return Err(Error::NonUnitBasis);
        }
        if !is_zero(forward.dot(up)) || !is_zero(forward.dot(right)) || !is_zero(up.dot(right)) {
            return Err(Error::NonOrthogonalBasis);
        }

        Ok(Self {
            location,
            forward,
            up,
            right,
            distance,
            width,
            height,
            res,
        })
    }

    pub fn location(&self) -> Point3 {
        self.location
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn resolution(&self) -> Resolution {
        self.res
    }

    /// Creates a [`Ray`] through the center of pixel (`col`, `row`) of a `columns` x `rows` grid
    /// over the view plane. Rows go downward.
    pub fn construct_ray(&self, columns: usize, rows: usize, col: usize, row: usize) -> Ray {
        let pc = self.location + self.forward * self.distance;
        let rx = self.width / columns as f64;
        let ry = self.height / rows as f64;

        let x = (col as f64 - (columns as f64 - 1.0) / 2.0) * rx;
        let y = -(row as f64 - (rows as f64 - 1.0) / 2.0) * ry;

        let mut p = pc;
        if !is_zero(x) {
            p += self.right * x;
        }
        if !is_zero(y) {
            p += self.up * y;
        }
        Ray::new(self.location, p - self.location)
    }

    /// Creates a [`Ray`] through pixel (`col`, `row`) at the camera's own resolution.
    pub fn ray(&self, col: usize, row: usize) -> Ray {
        self.construct_ray(self.res.columns, self.res.rows, col, row)
    }
}

fn positive(v: Option<f64>, field: CameraField) -> Result<f64> {
    match v {
        Some(v) if v > 0.0 => Ok(v),
        Some(_) => Err(Error::NonPositiveCameraField(field)),
        None => Err(Error::MissingCameraField(field)),
    }
}

/// Returns orthonormal forward and up vectors for looking at `target` from `location`.
fn look_at(location: Point3, target: Point3, up: Option<Vec3>) -> Result<(Vec3, Vec3)> {
    let forward = (target - location).try_normalized()?;
    let up = up.unwrap_or_else(|| vec3(0.0, 1.0, 0.0));
    let right = forward
        .cross(up)
        .try_normalized()
        .map_err(|_| Error::NonOrthogonalBasis)?;
    Ok((forward, right.cross(forward)))
}
