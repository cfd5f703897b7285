use crate::geometry::surface::Plane3D;

use super::{sign, Point3};

/// Returns `true` if `a` and `b` lie on the same side of `plane`.
///
/// Compares the exact sign of `(p - center) . normal` for both points, so a
/// point lying exactly on the plane only matches another point on the
/// plane. The normal does not need to be unit length.
#[must_use]
pub fn same_side_of_plane(plane: &Plane3D, a: &Point3, b: &Point3) -> bool {
    side_of_plane(plane, a) == side_of_plane(plane, b)
}

/// Sign of `point` relative to `plane`: `1` on the normal side, `-1` behind.
#[must_use]
pub fn side_of_plane(plane: &Plane3D, point: &Point3) -> i8 {
    sign((point - plane.center()).dot(plane.normal()))
}
