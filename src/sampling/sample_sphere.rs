use std::f64::consts::{PI, TAU};

use tracing::trace;

use crate::error::Result;
use crate::geometry::Sphere;
use crate::math::{Point3, Vector3};

use super::{check_resolution, fraction};

/// Samples points on the surface of a sphere.
///
/// Uses the spherical parameterization `phi = 2*pi*i / num_phi`,
/// `theta = pi*j / num_theta`, iterating `phi` in the outer loop. With
/// `filter_for_pov` set (the default), only points whose z-coordinate
/// relative to the sphere center is strictly positive are kept: the
/// hemisphere seen by a viewer looking down the z-axis.
pub struct SampleSphere {
    sphere: Sphere,
    num_phi: usize,
    num_theta: usize,
    filter_for_pov: bool,
}

impl SampleSphere {
    /// Creates a new `SampleSphere` operation with POV filtering enabled.
    #[must_use]
    pub fn new(sphere: Sphere, num_phi: usize, num_theta: usize) -> Self {
        Self {
            sphere,
            num_phi,
            num_theta,
            filter_for_pov: true,
        }
    }

    /// Enables or disables POV filtering.
    #[must_use]
    pub fn filter_for_pov(mut self, filter: bool) -> Self {
        self.filter_for_pov = filter;
        self
    }

    /// Executes the sampling.
    ///
    /// Without filtering the result holds exactly `num_phi * num_theta`
    /// points.
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero.
    pub fn execute(&self) -> Result<Vec<Point3>> {
        check_resolution("num_phi", self.num_phi)?;
        check_resolution("num_theta", self.num_theta)?;

        let center = self.sphere.center();
        let r = self.sphere.radius();
        let mut points = Vec::with_capacity(self.num_phi * self.num_theta);

        for i in 0..self.num_phi {
            let (sin_phi, cos_phi) = (TAU * fraction(i, self.num_phi)).sin_cos();
            for j in 0..self.num_theta {
                let (sin_theta, cos_theta) = (PI * fraction(j, self.num_theta)).sin_cos();
                let offset = Vector3::new(
                    r * sin_theta * cos_phi,
                    r * sin_theta * sin_phi,
                    r * cos_theta,
                );
                if self.filter_for_pov && offset.z <= 0.0 {
                    continue;
                }
                points.push(center + offset);
            }
        }

        trace!(
            radius = r,
            num_phi = self.num_phi,
            num_theta = self.num_theta,
            filter_for_pov = self.filter_for_pov,
            count = points.len(),
            "sampled sphere surface"
        );
        Ok(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sphere(x: f64, y: f64, z: f64, r: f64) -> Sphere {
        Sphere::new(Point3::new(x, y, z), r).unwrap()
    }

    #[test]
    fn unfiltered_count_is_full_grid() {
        let points = SampleSphere::new(sphere(0.0, 0.0, 0.0, 1.0), 12, 7)
            .filter_for_pov(false)
            .execute()
            .unwrap();
        assert_eq!(points.len(), 84);
    }

    #[test]
    fn points_lie_on_surface() {
        let s = sphere(1.0, 2.0, -3.0, 2.0);
        let points = SampleSphere::new(s, 10, 10)
            .filter_for_pov(false)
            .execute()
            .unwrap();
        for pt in &points {
            assert_abs_diff_eq!(nalgebra::distance(pt, s.center()), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn first_point_is_north_pole() {
        let points = SampleSphere::new(sphere(0.0, 0.0, 0.0, 3.0), 4, 4)
            .filter_for_pov(false)
            .execute()
            .unwrap();
        assert_abs_diff_eq!(points[0], Point3::new(0.0, 0.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn pov_filter_keeps_front_hemisphere_only() {
        let s = sphere(0.0, 0.0, -10.0, 2.0);
        let points = SampleSphere::new(s, 16, 15).execute().unwrap();
        assert!(!points.is_empty());
        assert!(points.iter().all(|pt| pt.z - s.center().z > 0.0));
    }

    #[test]
    fn pov_filter_drops_lower_rows() {
        // num_theta = 3 gives theta = 0, pi/3, 2*pi/3; the last row faces away.
        let points = SampleSphere::new(sphere(0.0, 0.0, 0.0, 1.0), 8, 3)
            .execute()
            .unwrap();
        assert_eq!(points.len(), 16);
    }

    #[test]
    fn zero_counts_rejected() {
        assert!(SampleSphere::new(sphere(0.0, 0.0, 0.0, 1.0), 0, 3).execute().is_err());
        assert!(SampleSphere::new(sphere(0.0, 0.0, 0.0, 1.0), 3, 0).execute().is_err());
    }
}
