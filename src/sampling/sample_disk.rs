use rand::Rng;

use crate::error::Result;
use crate::geometry::Circle3D;
use crate::math::Point3;

use super::{check_resolution, fraction, SampleCircle};

/// Samples points on the disk bounded by a circle.
///
/// Emits `num_radii` concentric rings of `num_points` points each, with ring
/// radii `radius * i / num_radii` for `i = 0..num_radii`. The innermost ring
/// collapses onto the center and the outer boundary itself is not sampled.
/// Each ring draws its own basis, so ring phases differ.
pub struct SampleDisk {
    circle: Circle3D,
    num_radii: usize,
    num_points: usize,
}

impl SampleDisk {
    /// Creates a new `SampleDisk` operation.
    #[must_use]
    pub fn new(circle: Circle3D, num_radii: usize, num_points: usize) -> Self {
        Self {
            circle,
            num_radii,
            num_points,
        }
    }

    /// Executes the sampling, returning `num_radii * num_points` points.
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point3>> {
        check_resolution("num_radii", self.num_radii)?;
        check_resolution("num_points", self.num_points)?;

        let mut points = Vec::with_capacity(self.num_radii * self.num_points);
        for i in 0..self.num_radii {
            let ring = self
                .circle
                .with_radius(self.circle.radius() * fraction(i, self.num_radii))?;
            points.extend(SampleCircle::new(ring, self.num_points).execute(rng)?);
        }
        Ok(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ring_count_times_points() {
        let circle = Circle3D::new(Point3::origin(), 3.0, Vector3::z()).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let points = SampleDisk::new(circle, 3, 10).execute(&mut rng).unwrap();
        assert_eq!(points.len(), 30);
    }

    #[test]
    fn rings_grow_but_never_reach_boundary() {
        let circle = Circle3D::new(Point3::origin(), 4.0, Vector3::z()).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let points = SampleDisk::new(circle, 4, 6).execute(&mut rng).unwrap();

        for (ring, chunk) in points.chunks(6).enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = ring as f64;
            for pt in chunk {
                assert_abs_diff_eq!(pt.coords.norm(), expected, epsilon = 1e-12);
                assert_abs_diff_eq!(pt.z, 0.0, epsilon = 1e-12);
            }
        }
        assert!(points.iter().all(|pt| pt.coords.norm() < 4.0 - 1e-9));
    }

    #[test]
    fn zero_counts_rejected() {
        let circle = Circle3D::new(Point3::origin(), 1.0, Vector3::z()).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(SampleDisk::new(circle, 0, 4).execute(&mut rng).is_err());
        assert!(SampleDisk::new(circle, 4, 0).execute(&mut rng).is_err());
    }
}
