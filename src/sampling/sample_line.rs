use crate::error::Result;
use crate::geometry::Line3D;
use crate::math::Point3;

use super::{check_resolution, fraction};

/// Samples evenly spaced points along a segment.
///
/// Produces `num_points` points at parameters `i / num_points` for
/// `i = 0..num_points`. The start point is included, the end point never is.
pub struct SampleLine {
    line: Line3D,
    num_points: usize,
}

impl SampleLine {
    /// Creates a new `SampleLine` operation.
    #[must_use]
    pub fn new(line: Line3D, num_points: usize) -> Self {
        Self { line, num_points }
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_points` is zero.
    pub fn execute(&self) -> Result<Vec<Point3>> {
        check_resolution("num_points", self.num_points)?;
        Ok((0..self.num_points)
            .map(|i| self.line.evaluate(fraction(i, self.num_points)))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn five_points_exclude_end() {
        let line = Line3D::new(p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)).unwrap();
        let points = SampleLine::new(line, 5).execute().unwrap();
        assert_eq!(points.len(), 5);
        for (pt, x) in points.iter().zip([0.0, 2.0, 4.0, 6.0, 8.0]) {
            assert_relative_eq!(*pt, p(x, 0.0, 0.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn single_point_is_start() {
        let line = Line3D::new(p(1.0, 2.0, 3.0), p(4.0, 5.0, 6.0)).unwrap();
        let points = SampleLine::new(line, 1).execute().unwrap();
        assert_eq!(points, vec![p(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn zero_points_rejected() {
        let line = Line3D::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).unwrap();
        assert!(SampleLine::new(line, 0).execute().is_err());
    }
}
