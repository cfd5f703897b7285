use rand::Rng;

use crate::error::Result;
use crate::geometry::{Cylinder, Sphere};
use crate::math::Point3;
use crate::operations::query::{PointInCylinder, PointInSphere};
use crate::sampling::{SampleCylinder, SampleSphere, SamplingParams};

/// A closed solid that can be sampled and tested for containment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solid {
    Sphere(Sphere),
    Cylinder(Cylinder),
}

impl Solid {
    /// Returns `true` if `point` lies inside the solid.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        match self {
            Self::Sphere(sphere) => PointInSphere::new(sphere, *point).execute(),
            Self::Cylinder(cylinder) => PointInCylinder::new(cylinder, *point).execute(),
        }
    }

    /// Samples the solid's surface.
    ///
    /// Spheres use `num_phi`, `num_theta` and `filter_for_pov`; cylinders use
    /// `resolution`.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` holds a zero count.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        params: &SamplingParams,
        rng: &mut R,
    ) -> Result<Vec<Point3>> {
        params.validate()?;
        match self {
            Self::Sphere(sphere) => SampleSphere::new(*sphere, params.num_phi, params.num_theta)
                .filter_for_pov(params.filter_for_pov)
                .execute(),
            Self::Cylinder(cylinder) => {
                SampleCylinder::new(*cylinder, params.resolution).execute(rng)
            }
        }
    }
}

impl From<Sphere> for Solid {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<Cylinder> for Solid {
    fn from(cylinder: Cylinder) -> Self {
        Self::Cylinder(cylinder)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::CapType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn contains_dispatches_by_kind() {
        let ball: Solid = Sphere::new(p(0.0, 0.0, 0.0), 1.0).unwrap().into();
        let rod: Solid = Cylinder::new(p(0.0, 0.0, 0.0), p(5.0, 0.0, 0.0), 0.5, CapType::Flat)
            .unwrap()
            .into();
        assert!(ball.contains(&p(0.5, 0.5, 0.0)));
        assert!(!ball.contains(&p(3.0, 0.0, 0.0)));
        assert!(rod.contains(&p(3.0, 0.0, 0.0)));
        assert!(!rod.contains(&p(6.0, 0.0, 0.0)));
    }

    #[test]
    fn sample_uses_params() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = SamplingParams {
            resolution: 4,
            num_phi: 6,
            num_theta: 5,
            filter_for_pov: false,
        };
        let ball: Solid = Sphere::new(p(0.0, 0.0, 0.0), 1.0).unwrap().into();
        assert_eq!(ball.sample(&params, &mut rng).unwrap().len(), 30);

        let rod: Solid = Cylinder::new(p(0.0, 0.0, 0.0), p(5.0, 0.0, 0.0), 0.5, CapType::Flat)
            .unwrap()
            .into();
        assert_eq!(rod.sample(&params, &mut rng).unwrap().len(), 16 + 8);
    }

    #[test]
    fn sample_rejects_invalid_params() {
        let mut rng = StdRng::seed_from_u64(0);
        let params = SamplingParams {
            resolution: 0,
            ..SamplingParams::default()
        };
        let ball: Solid = Sphere::new(p(0.0, 0.0, 0.0), 1.0).unwrap().into();
        assert!(ball.sample(&params, &mut rng).is_err());
    }
}
