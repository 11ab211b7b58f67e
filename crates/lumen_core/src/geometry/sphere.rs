//! Sphere primitive.

use lumen_math::{align_zero, is_zero, Interval, Ray, Vec3};

use super::{GeometryError, GeometryResult, Intersectable};

/// A sphere given by center and radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> GeometryResult<Self> {
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f32> {
        let u = self.center - ray.origin();

        // Ray starts at the center: exactly one crossing, one radius away
        if is_zero(u.length()) {
            return if ray_t.surrounds(self.radius) {
                vec![self.radius]
            } else {
                Vec::new()
            };
        }

        // tm: projection of the center on the ray; d2: squared distance
        // from the center to the ray line
        let tm = ray.direction().dot(u);
        let d2 = (u.length_squared() - tm * tm).max(0.0);
        let r2 = self.radius * self.radius;

        // Tangent or missing rays do not intersect
        if d2 >= r2 {
            return Vec::new();
        }

        let th = (r2 - d2).sqrt();
        [tm - th, tm + th]
            .into_iter()
            .filter(|&t| align_zero(t) > 0.0 && ray_t.surrounds(t))
            .collect()
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }
}
