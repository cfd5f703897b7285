use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::geometry::{Circle3D, Cylinder};
use crate::math::Point3;

use super::{check_resolution, SampleCap, SampleCircle, SampleLine};

/// Samples points on the surface of a capped cylinder.
///
/// Places `resolution` ring centers along the axis (start included, end
/// excluded), samples `resolution` points on the rim circle around each,
/// then appends the start cap and the end cap as produced by [`SampleCap`].
/// The body alone holds `resolution * resolution` points.
pub struct SampleCylinder {
    cylinder: Cylinder,
    resolution: usize,
}

impl SampleCylinder {
    /// Creates a new `SampleCylinder` operation.
    #[must_use]
    pub fn new(cylinder: Cylinder, resolution: usize) -> Self {
        Self {
            cylinder,
            resolution,
        }
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if `resolution` is zero.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point3>> {
        check_resolution("resolution", self.resolution)?;

        let cyl = &self.cylinder;
        let normal = cyl.axis_direction();
        let centers = SampleLine::new(cyl.axis_line(), self.resolution).execute()?;

        let mut points = Vec::with_capacity(self.resolution * (self.resolution + 2));
        for center in centers {
            let ring = Circle3D::new(center, cyl.radius(), normal)?;
            points.extend(SampleCircle::new(ring, self.resolution).execute(rng)?);
        }
        let body = points.len();

        points.extend(SampleCap::start_of(cyl, self.resolution).execute(rng)?);
        points.extend(SampleCap::end_of(cyl, self.resolution).execute(rng)?);

        debug!(
            cap_type = %cyl.cap_type(),
            radius = cyl.radius(),
            resolution = self.resolution,
            body,
            caps = points.len() - body,
            "sampled cylinder surface"
        );
        Ok(points)
    }
}
