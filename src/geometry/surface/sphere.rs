use crate::error::Result;
use crate::geometry::check_radius;
use crate::math::Point3;

/// A sphere given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or not finite.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        Ok(Self {
            center,
            radius: check_radius("sphere", radius)?,
        })
    }

    /// Returns the center of the sphere.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}
