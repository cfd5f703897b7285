use crate::error::{GeometryError, Result};
use crate::geometry::check_radius;
use crate::math::{Point3, Vector3, TOLERANCE};

/// A circle in 3D space.
///
/// Defined by a center, a radius and the normal of the plane that contains
/// it. Unlike a parametric circle there is no stored reference direction:
/// the zero angle is chosen at sampling time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle3D {
    center: Point3,
    radius: f64,
    normal: Vector3,
}

impl Circle3D {
    /// Creates a new circle.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the circle
    /// * `radius` - Radius (finite, non-negative)
    /// * `normal` - Normal of the circle plane, stored as given
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or not finite, or the
    /// normal is zero-length.
    pub fn new(center: Point3, radius: f64, normal: Vector3) -> Result<Self> {
        let radius = check_radius("circle", radius)?;
        if normal.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            center,
            radius,
            normal,
        })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normal vector as supplied at construction.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns a concentric circle in the same plane with another radius.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is negative or not finite.
    pub fn with_radius(&self, radius: f64) -> Result<Self> {
        Ok(Self {
            radius: check_radius("circle", radius)?,
            ..*self
        })
    }
}
