use crate::math::{Point3, Vector3};

/// An infinite plane through `center` with the given normal.
///
/// The normal is stored as supplied and is not normalized. Side tests only
/// need its direction; anything measuring distances must normalize it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane3D {
    center: Point3,
    normal: Vector3,
}

impl Plane3D {
    /// Creates a new plane.
    #[must_use]
    pub fn new(center: Point3, normal: Vector3) -> Self {
        Self { center, normal }
    }

    /// Returns the point the plane passes through.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the normal vector as supplied at construction.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }
}
