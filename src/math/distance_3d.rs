use crate::geometry::curve::Line3D;

use super::Point3;

/// Returns the distance from `point` to the ray that starts at `line.start()`
/// and runs through `line.end()`.
///
/// The axial overshoot is clamped only on the start side: a point behind
/// the start is measured to the start point, while a point beyond the end
/// is measured perpendicular to the carrier line as if the segment went on.
/// Capsule containment for round-capped cylinders is built on this
/// behavior.
#[must_use]
pub fn distance_to_line(line: &Line3D, point: &Point3) -> f64 {
    let d = line.direction();
    let behind_start = (line.start() - point).dot(&d).max(0.0);
    let perpendicular = (point - line.start()).cross(&d).norm();
    behind_start.hypot(perpendicular)
}
