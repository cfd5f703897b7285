use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, GeometryError, GeosampleError, Result};
use crate::geometry::check_radius;
use crate::geometry::curve::Line3D;
use crate::geometry::surface::Plane3D;
use crate::math::{Point3, Vector3, TOLERANCE};

/// How the two ends of a [`Cylinder`] are closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapType {
    /// Open ends. Containment is bounded by the two end planes.
    NoCap,
    /// A flat disk at each end.
    Flat,
    /// A hemisphere at each end, turning the cylinder into a capsule.
    Round,
}

impl fmt::Display for CapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoCap => "none",
            Self::Flat => "flat",
            Self::Round => "round",
        };
        f.write_str(name)
    }
}

impl FromStr for CapType {
    type Err = GeosampleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "nocap" => Ok(Self::NoCap),
            "flat" => Ok(Self::Flat),
            "round" => Ok(Self::Round),
            _ => Err(ConfigError::UnknownCapType(s.to_owned()).into()),
        }
    }
}

/// A capped cylinder between two axis end points.
///
/// The axis runs from `start` to `end`; `cap_type` decides how both ends
/// are surfaced and bounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    start: Point3,
    end: Point3,
    radius: f64,
    cap_type: CapType,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or not finite, or if
    /// `start` and `end` coincide.
    pub fn new(start: Point3, end: Point3, radius: f64, cap_type: CapType) -> Result<Self> {
        let radius = check_radius("cylinder", radius)?;
        if (end - start).norm() < TOLERANCE {
            return Err(
                GeometryError::Degenerate("cylinder axis has zero length".into()).into(),
            );
        }
        Ok(Self {
            start,
            end,
            radius,
            cap_type,
        })
    }

    /// Returns the axis start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the axis end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the cap type.
    #[must_use]
    pub fn cap_type(&self) -> CapType {
        self.cap_type
    }

    /// Returns the axis vector `end - start`.
    #[must_use]
    pub fn axis(&self) -> Vector3 {
        self.end - self.start
    }

    /// Returns the unit axis direction.
    #[must_use]
    pub fn axis_direction(&self) -> Vector3 {
        self.axis().normalize()
    }

    /// Returns the axis as a segment.
    #[must_use]
    pub fn axis_line(&self) -> Line3D {
        // Endpoints were checked to be distinct in `new`.
        Line3D::from_distinct(self.start, self.end)
    }

    /// Returns the planes perpendicular to the axis through `start` and `end`.
    #[must_use]
    pub fn end_planes(&self) -> (Plane3D, Plane3D) {
        let normal = self.axis_direction();
        (
            Plane3D::new(self.start, normal),
            Plane3D::new(self.end, normal),
        )
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
    fn axis_and_direction() {
        let c = Cylinder::new(p(0.0, 0.0, 1.0), p(0.0, 0.0, 5.0), 1.0, CapType::Flat).unwrap();
        assert_relative_eq!(c.axis(), Vector3::new(0.0, 0.0, 4.0));
        assert_relative_eq!(c.axis_direction(), Vector3::z());
        assert_relative_eq!(c.axis_line().length(), 4.0);
    }

    #[test]
    fn end_planes_face_along_axis() {
        let c = Cylinder::new(p(1.0, 0.0, 0.0), p(3.0, 0.0, 0.0), 1.0, CapType::NoCap).unwrap();
        let (a, b) = c.end_planes();
        assert_eq!(*a.center(), p(1.0, 0.0, 0.0));
        assert_eq!(*b.center(), p(3.0, 0.0, 0.0));
        assert_relative_eq!(*a.normal(), Vector3::x());
        assert_relative_eq!(*b.normal(), Vector3::x());
    }

    #[test]
    fn zero_length_axis_rejected() {
        let r = Cylinder::new(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0), 1.0, CapType::Round);
        assert!(r.is_err());
    }

    #[test]
    fn invalid_radius() {
        let r = Cylinder::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, 1.0), -2.0, CapType::Round);
        assert!(r.is_err());
    }

    #[test]
    fn cap_type_parses() {
        assert_eq!("flat".parse::<CapType>().unwrap(), CapType::Flat);
        assert_eq!(" Round ".parse::<CapType>().unwrap(), CapType::Round);
        assert_eq!("NoCap".parse::<CapType>().unwrap(), CapType::NoCap);
        assert_eq!("none".parse::<CapType>().unwrap(), CapType::NoCap);
    }

    #[test]
    fn unknown_cap_type_is_an_error() {
        let err = "domed".parse::<CapType>().unwrap_err();
        assert!(matches!(
            err,
            GeosampleError::Config(ConfigError::UnknownCapType(ref s)) if s == "domed"
        ));
    }

    #[test]
    fn cap_type_display_roundtrips() {
        for cap in [CapType::NoCap, CapType::Flat, CapType::Round] {
            assert_eq!(cap.to_string().parse::<CapType>().unwrap(), cap);
        }
    }
}
