mod bounding_box;
mod point_in_cylinder;
mod point_in_sphere;

pub use bounding_box::{Aabb, BoundingBox};
pub use point_in_cylinder::{point_is_inside_cylinder, PointInCylinder};
pub use point_in_sphere::{point_is_inside_sphere, PointInSphere};
