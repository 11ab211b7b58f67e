//! Infinite plane.

use lumen_math::{align_zero, is_zero, unit, Interval, Ray, Vec3};

use super::{GeometryResult, Intersectable};

/// A plane given by a point on it and a unit normal.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a plane through `point` with the given (not necessarily unit) normal.
    pub fn new(point: Vec3, normal: Vec3) -> GeometryResult<Self> {
        Ok(Self {
            point,
            normal: unit(normal)?,
        })
    }

    /// Create the plane through three points.
    ///
    /// Fails when the points are coincident or collinear.
    pub fn from_points(p0: Vec3, p1: Vec3, p2: Vec3) -> GeometryResult<Self> {
        let normal = unit((p1 - p0).cross(p2 - p0))?;
        Ok(Self { point: p0, normal })
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Intersectable for Plane {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f32> {
        // Parallel rays never cross the plane
        let nv = self.normal.dot(ray.direction());
        if is_zero(nv) {
            return Vec::new();
        }

        // Rays starting on the plane are not counted as crossing it
        let numerator = self.normal.dot(self.point - ray.origin());
        if is_zero(numerator) {
            return Vec::new();
        }

        let t = align_zero(numerator / nv);
        if t > 0.0 && ray_t.surrounds(t) {
            vec![t]
        } else {
            Vec::new()
        }
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}
