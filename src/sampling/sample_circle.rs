use std::f64::consts::TAU;

use rand::Rng;

use crate::error::Result;
use crate::geometry::Circle3D;
use crate::math::{orthonormal_basis, Point3};

use super::{check_resolution, fraction};

/// Samples points on the circumference of a circle.
///
/// Produces `num_points` points at angles `2*pi*i / num_points`, measured in
/// an orthonormal basis of the circle plane drawn from the generator.
pub struct SampleCircle {
    circle: Circle3D,
    num_points: usize,
}

impl SampleCircle {
    /// Creates a new `SampleCircle` operation.
    #[must_use]
    pub fn new(circle: Circle3D, num_points: usize) -> Self {
        Self { circle, num_points }
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_points` is zero.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point3>> {
        check_resolution("num_points", self.num_points)?;

        let normal = self.circle.normal().normalize();
        let (v, w) = orthonormal_basis(&normal, rng);
        let center = self.circle.center();
        let r = self.circle.radius();

        Ok((0..self.num_points)
            .map(|i| {
                let angle = TAU * fraction(i, self.num_points);
                center + v * (r * angle.cos()) + w * (r * angle.sin())
            })
            .collect())
    }
}
