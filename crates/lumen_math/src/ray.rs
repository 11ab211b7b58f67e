use crate::{unit, MathResult, Vec3};

/// Distance a secondary ray origin is pushed off the surface it starts on.
pub const DELTA: f32 = 0.1;

/// A ray in 3D space with an origin and a unit direction.
///
/// The direction is normalized on construction, so `at(t)` moves exactly
/// `t` units away from the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// `direction` must be non-zero; use [`Ray::try_new`] when that is not
    /// known in advance.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(direction.length_squared() > 0.0, "ray direction must be non-zero");
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a new ray, failing if `direction` has zero length.
    pub fn try_new(origin: Vec3, direction: Vec3) -> MathResult<Self> {
        Ok(Self {
            origin,
            direction: unit(direction)?,
        })
    }

    /// Create a ray leaving a surface point.
    ///
    /// The origin is moved by [`DELTA`] along `normal`, toward the side of the
    /// surface that `direction` points into, so the new ray does not hit the
    /// surface it starts on.
    pub fn offset(point: Vec3, direction: Vec3, normal: Vec3) -> Self {
        let nd = normal.dot(direction);
        let bias = if nd > 0.0 { DELTA } else { -DELTA };
        Self::new(point + normal * bias, direction)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
