use crate::geometry::{CapType, Cylinder};
use crate::math::{distance_to_line, same_side_of_plane, Point3};

/// Tests whether a point lies inside a capped cylinder, boundary included.
///
/// The radial test uses [`distance_to_line`] against the axis. For
/// [`CapType::Round`] that is the whole test. For [`CapType::Flat`] and
/// [`CapType::NoCap`] the point must also lie between the planes through
/// `start` and `end` perpendicular to the axis (on-plane points count as
/// outside unless the opposite endpoint is on the plane too).
pub struct PointInCylinder<'a> {
    cylinder: &'a Cylinder,
    point: Point3,
}

impl<'a> PointInCylinder<'a> {
    /// Creates a new `PointInCylinder` query.
    #[must_use]
    pub fn new(cylinder: &'a Cylinder, point: Point3) -> Self {
        Self { cylinder, point }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        let cyl = self.cylinder;
        let within_radius = distance_to_line(&cyl.axis_line(), &self.point) <= cyl.radius();

        match cyl.cap_type() {
            CapType::Round => within_radius,
            CapType::Flat | CapType::NoCap => {
                let (start_plane, end_plane) = cyl.end_planes();
                let between = same_side_of_plane(&start_plane, &self.point, cyl.end())
                    && same_side_of_plane(&end_plane, &self.point, cyl.start());
                within_radius && between
            }
        }
    }
}

/// Returns `true` if `point` lies inside `cylinder` according to its cap type.
#[must_use]
pub fn point_is_inside_cylinder(cylinder: &Cylinder, point: &Point3) -> bool {
    PointInCylinder::new(cylinder, *point).execute()
}
