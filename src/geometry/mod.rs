pub mod curve;
pub mod surface;

pub use curve::{Circle3D, Line3D};
pub use surface::{CapType, Cylinder, Plane3D, Sphere};

use crate::error::{GeometryError, Result};

/// Checks that a radius is finite and non-negative.
pub(crate) fn check_radius(shape: &'static str, radius: f64) -> Result<f64> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        Err(GeometryError::InvalidRadius {
            shape,
            value: radius,
        }
        .into())
    }
}
