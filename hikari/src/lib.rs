pub mod camera;
pub mod error;
pub mod film;
pub mod integrators;
pub mod interaction;
pub mod lights;
pub mod macros;
pub mod material;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod surfaces;

pub use error::{Error, Result};
