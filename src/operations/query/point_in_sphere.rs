use crate::geometry::Sphere;
use crate::math::Point3;

/// Tests whether a point lies inside a sphere, boundary included.
pub struct PointInSphere<'a> {
    sphere: &'a Sphere,
    point: Point3,
}

impl<'a> PointInSphere<'a> {
    /// Creates a new `PointInSphere` query.
    #[must_use]
    pub fn new(sphere: &'a Sphere, point: Point3) -> Self {
        Self { sphere, point }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        nalgebra::distance(self.sphere.center(), &self.point) <= self.sphere.radius()
    }
}

/// Returns `true` if `point` is within `sphere.radius()` of its center.
#[must_use]
pub fn point_is_inside_sphere(sphere: &Sphere, point: &Point3) -> bool {
    PointInSphere::new(sphere, *point).execute()
}
