//! Linear algebra primitives and geometric predicates.
//!
//! Points and vectors are nalgebra types. The vector from `b` to `a` is
//! `a - b`; sign-based predicates in this module rely on that direction.

pub mod basis;
pub mod distance_3d;
pub mod plane_side;

use rand::Rng;

pub use basis::orthonormal_basis;
pub use distance_3d::distance_to_line;
pub use plane_side::same_side_of_plane;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `-1`, `0` or `1` according to the sign of `x`.
///
/// Only an exact zero maps to `0`; there is no tolerance band. `NaN` maps
/// to `0`.
#[must_use]
pub fn sign(x: f64) -> i8 {
    if x < 0.0 {
        -1
    } else if x > 0.0 {
        1
    } else {
        0
    }
}

/// Draws a vector whose components are independently uniform in `[0, 1)`.
pub fn random_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    Vector3::new(rng.random(), rng.random(), rng.random())
}

/// Scalar cross product of two planar vectors, `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` is counter-clockwise from `a`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}
