use rand::Rng;

use crate::error::Result;
use crate::geometry::{CapType, Circle3D, Cylinder, Plane3D, Sphere};
use crate::math::{same_side_of_plane, Point3, Vector3};

use super::{check_resolution, SampleCircle, SampleSphere};

/// Samples the cap closing one end of a cylinder.
///
/// - [`CapType::NoCap`] yields no points.
/// - [`CapType::Flat`] yields `resolution` points on the rim circle at the
///   cap center, in the plane perpendicular to the axis.
/// - [`CapType::Round`] samples a full `resolution x resolution` sphere at
///   the cap center and keeps only the points on the opposite side of the
///   cap plane from `far_center`, the center of the other end.
pub struct SampleCap {
    cap_type: CapType,
    center: Point3,
    radius: f64,
    normal: Vector3,
    far_center: Point3,
    resolution: usize,
}

impl SampleCap {
    /// Creates a new `SampleCap` operation.
    #[must_use]
    pub fn new(
        cap_type: CapType,
        center: Point3,
        radius: f64,
        normal: Vector3,
        far_center: Point3,
        resolution: usize,
    ) -> Self {
        Self {
            cap_type,
            center,
            radius,
            normal,
            far_center,
            resolution,
        }
    }

    /// Creates the operation for the cap at the start of `cylinder`.
    #[must_use]
    pub fn start_of(cylinder: &Cylinder, resolution: usize) -> Self {
        Self::new(
            cylinder.cap_type(),
            *cylinder.start(),
            cylinder.radius(),
            cylinder.axis_direction(),
            *cylinder.end(),
            resolution,
        )
    }

    /// Creates the operation for the cap at the end of `cylinder`.
    #[must_use]
    pub fn end_of(cylinder: &Cylinder, resolution: usize) -> Self {
        Self::new(
            cylinder.cap_type(),
            *cylinder.end(),
            cylinder.radius(),
            cylinder.axis_direction(),
            *cylinder.start(),
            resolution,
        )
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if `resolution` is zero, or if the radius or normal
    /// cannot form a valid circle or sphere.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point3>> {
        check_resolution("resolution", self.resolution)?;

        match self.cap_type {
            CapType::NoCap => Ok(Vec::new()),
            CapType::Flat => {
                let rim = Circle3D::new(self.center, self.radius, self.normal)?;
                SampleCircle::new(rim, self.resolution).execute(rng)
            }
            CapType::Round => {
                let sphere = Sphere::new(self.center, self.radius)?;
                let plane = Plane3D::new(self.center, self.normal);
                let mut points = SampleSphere::new(sphere, self.resolution, self.resolution)
                    .filter_for_pov(false)
                    .execute()?;
                points.retain(|pt| !same_side_of_plane(&plane, &self.far_center, pt));
                Ok(points)
            }
        }
    }
}
