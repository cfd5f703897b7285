use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A finite line segment in 3D space.
///
/// The parametric form is `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3D {
    start: Point3,
    end: Point3,
}

impl Line3D {
    /// Creates a new segment from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide, since the direction is
    /// then undefined.
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self { start, end })
    }

    /// Builds a segment from endpoints already known to be distinct.
    pub(crate) fn from_distinct(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns the unit direction `normalize(end - start)`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        (self.end - self.start).normalize()
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Evaluates the segment at parameter `t`; `0` is the start, `1` the end.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point3 {
        self.start + (self.end - self.start) * t
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
    fn direction_is_unit() {
        let line = Line3D::new(p(1.0, 1.0, 1.0), p(1.0, 4.0, 5.0)).unwrap();
        assert_relative_eq!(line.direction(), Vector3::new(0.0, 0.6, 0.8));
        assert_relative_eq!(line.length(), 5.0);
    }

    #[test]
    fn evaluate_endpoints_and_middle() {
        let line = Line3D::new(p(0.0, 0.0, 0.0), p(2.0, 4.0, 6.0)).unwrap();
        assert_relative_eq!(line.evaluate(0.0), p(0.0, 0.0, 0.0));
        assert_relative_eq!(line.evaluate(0.5), p(1.0, 2.0, 3.0));
        assert_relative_eq!(line.evaluate(1.0), p(2.0, 4.0, 6.0));
    }

    #[test]
    fn coincident_endpoints_rejected() {
        assert!(Line3D::new(p(1.0, 2.0, 3.0), p(1.0, 2.0, 3.0)).is_err());
    }
}
