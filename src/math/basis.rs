use rand::Rng;

use super::{random_vector, Vector3, TOLERANCE};

/// Builds two unit vectors `(v, w)` spanning the plane perpendicular to `n`.
///
/// `n` must be a unit vector. A random seed vector is drawn from `rng`, its
/// component along `n` is projected out and the remainder normalized to give
/// `v`; then `w = n x v`. The angular phase of the basis therefore depends on
/// the generator state: seed the generator to get reproducible output.
///
/// A seed that is parallel to `n` is redrawn.
pub fn orthonormal_basis<R: Rng + ?Sized>(n: &Vector3, rng: &mut R) -> (Vector3, Vector3) {
    loop {
        let seed = random_vector(rng);
        let projected = seed - n * seed.dot(n);
        if let Some(v) = projected.try_normalize(TOLERANCE) {
            let w = n.cross(&v);
            return (v, w);
        }
    }
}
