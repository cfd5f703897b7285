use crate::geometry::CapType;
use crate::math::{Point3, Vector3};
use crate::solid::Solid;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Returns `true` if `point` lies inside the box, boundary included.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Returns `true` if the two boxes overlap.
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    fn around(a: &Point3, b: &Point3, extent: &Vector3) -> Self {
        Self {
            min: a.inf(b) - extent,
            max: a.sup(b) + extent,
        }
    }
}

/// Computes the axis-aligned bounding box of a solid's surface.
///
/// Spheres and round-capped cylinders are padded by the full radius around
/// their centers. Flat and open cylinders are bounded by their end disks,
/// whose extent along axis `i` is `r * sqrt(1 - d_i^2)` for the unit axis
/// direction `d`.
pub struct BoundingBox<'a> {
    solid: &'a Solid,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB.
    #[must_use]
    pub fn execute(&self) -> Aabb {
        match self.solid {
            Solid::Sphere(sphere) => {
                let c = sphere.center();
                Aabb::around(c, c, &Vector3::repeat(sphere.radius()))
            }
            Solid::Cylinder(cyl) => {
                let r = cyl.radius();
                let extent = match cyl.cap_type() {
                    CapType::Round => Vector3::repeat(r),
                    CapType::Flat | CapType::NoCap => cyl
                        .axis_direction()
                        .map(|d| r * (1.0 - d * d).max(0.0).sqrt()),
                };
                Aabb::around(cyl.start(), cyl.end(), &extent)
            }
        }
    }
}
