//! Geometry kernel for sampling the surfaces of basic solids.
//!
//! Builds points, lines, planes, circles, spheres and capped cylinders,
//! produces ordered point samples on their boundaries, and answers the
//! side-of-plane, point-to-axis and containment predicates used to decide
//! visibility when those solids are projected into a 2D scene.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod sampling;
pub mod solid;

pub use error::{GeosampleError, Result};
pub use solid::Solid;
