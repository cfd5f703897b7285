//! Point sampling of shape boundaries.
//!
//! Each operation returns an ordered `Vec<Point3>`. Operations that need an
//! orthonormal basis (circles, disks, cylinders and flat caps) take the
//! random generator at execution time.

mod sample_cap;
mod sample_circle;
mod sample_cylinder;
mod sample_disk;
mod sample_line;
mod sample_sphere;

pub use sample_cap::SampleCap;
pub use sample_circle::SampleCircle;
pub use sample_cylinder::SampleCylinder;
pub use sample_disk::SampleDisk;
pub use sample_line::SampleLine;
pub use sample_sphere::SampleSphere;

use crate::error::{Result, SamplingError};

/// Resolution settings used when sampling whole solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingParams {
    /// Rings along a cylinder axis, points per ring, and cap resolution.
    pub resolution: usize,
    /// Azimuthal steps on a sphere.
    pub num_phi: usize,
    /// Polar steps on a sphere.
    pub num_theta: usize,
    /// Keep only sphere points facing a viewer looking down the z-axis.
    pub filter_for_pov: bool,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            resolution: 16,
            num_phi: 32,
            num_theta: 16,
            filter_for_pov: true,
        }
    }
}

impl SamplingParams {
    /// Checks that every count is positive.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first zero count.
    pub fn validate(&self) -> Result<()> {
        check_resolution("resolution", self.resolution)?;
        check_resolution("num_phi", self.num_phi)?;
        check_resolution("num_theta", self.num_theta)?;
        Ok(())
    }
}

/// Rejects a zero resolution count.
pub(crate) fn check_resolution(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(SamplingError::InvalidResolution { parameter, value }.into());
    }
    Ok(())
}

/// Returns `i / n` as a float.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn fraction(i: usize, n: usize) -> f64 {
    i as f64 / n as f64
}
