mod cylinder;
mod plane;
mod sphere;

pub use cylinder::{CapType, Cylinder};
pub use plane::Plane3D;
pub use sphere::Sphere;
