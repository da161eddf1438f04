mod ambient_light;
mod distant_light;
mod point_light;
mod spot_light;

pub use ambient_light::AmbientLight;
pub use distant_light::DistantLight;
pub use point_light::PointLight;
pub use spot_light::SpotLight;

use crate::math::{Point3, Spectrum, Vec3};

pub trait Light: Send + Sync {
    /// Returns the intensity this `Light` delivers at `p`.
    fn intensity(&self, p: Point3) -> Spectrum;
    /// Returns the unit direction from this `Light` toward `p`.
    fn direction(&self, p: Point3) -> Vec3;
    /// Returns the distance from this `Light` to `p`, infinite for lights without a position.
    fn distance(&self, p: Point3) -> f64;
}
