//! Infinite tube and capped cylinder around an axis ray.

use lumen_math::{align_zero, is_zero, Interval, Ray, Vec3};

use super::{GeometryError, GeometryResult, Intersectable};

/// An infinite tube: every point at `radius` from the axis line.
#[derive(Clone, Debug, PartialEq)]
pub struct Tube {
    axis: Ray,
    radius: f32,
}

impl Tube {
    /// Create a new tube.
    pub fn new(axis: Ray, radius: f32) -> GeometryResult<Self> {
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { axis, radius })
    }

    pub fn axis(&self) -> &Ray {
        &self.axis
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Signed distance of the projection of `point` along the axis.
    fn projection(&self, point: Vec3) -> f32 {
        self.axis.direction().dot(point - self.axis.origin())
    }
}

impl Intersectable for Tube {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f32> {
        let v = self.axis.direction();
        let d = ray.direction();
        let dp = ray.origin() - self.axis.origin();

        // Components perpendicular to the axis
        let d_perp = d - v * d.dot(v);
        let dp_perp = dp - v * dp.dot(v);

        // Rays parallel to the axis never cross the side
        let a = d_perp.length_squared();
        if is_zero(a) {
            return Vec::new();
        }

        let b = 2.0 * d_perp.dot(dp_perp);
        let c = dp_perp.length_squared() - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return Vec::new();
        }

        let sqrtd = discriminant.sqrt();
        [(-b - sqrtd) / (2.0 * a), (-b + sqrtd) / (2.0 * a)]
            .into_iter()
            .filter(|&t| align_zero(t) > 0.0 && ray_t.surrounds(t))
            .collect()
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        let center = self.axis.at(self.projection(point));
        (point - center).normalize_or_zero()
    }
}

/// A tube cut to `[0, height]` along its axis, closed by two flat caps.
#[derive(Clone, Debug, PartialEq)]
pub struct Cylinder {
    tube: Tube,
    height: f32,
}

impl Cylinder {
    /// Create a new cylinder whose base cap is centered on the axis origin.
    pub fn new(axis: Ray, radius: f32, height: f32) -> GeometryResult<Self> {
        if height <= 0.0 {
            return Err(GeometryError::NonPositiveHeight(height));
        }
        Ok(Self {
            tube: Tube::new(axis, radius)?,
            height,
        })
    }

    pub fn tube(&self) -> &Tube {
        &self.tube
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Intersectable for Cylinder {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f32> {
        let v = self.tube.axis().direction();
        let base = self.tube.axis().origin();
        let r2 = self.tube.radius() * self.tube.radius();

        let mut ts: Vec<f32> = self
            .tube
            .intersect(ray, ray_t)
            .into_iter()
            .filter(|&t| {
                let h = align_zero(self.tube.projection(ray.at(t)));
                h > 0.0 && h < self.height
            })
            .collect();

        let nv = v.dot(ray.direction());
        if !is_zero(nv) {
            for center in [base, base + v * self.height] {
                let t = align_zero(v.dot(center - ray.origin()) / nv);
                if t > 0.0 && ray_t.surrounds(t) && (ray.at(t) - center).length_squared() < r2 {
                    ts.push(t);
                }
            }
        }

        ts.sort_by(|a, b| a.total_cmp(b));
        ts
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        let v = self.tube.axis().direction();
        let h = self.tube.projection(point);
        if is_zero(h) {
            -v
        } else if is_zero(h - self.height) {
            v
        } else {
            self.tube.normal_at(point)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z_axis() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::Z)
    }

    #[test]
    fn test_tube_crosses_twice() {
        let tube = Tube::new(z_axis(), 1.0).unwrap();
        let ray = Ray::new(Vec3::new(-2.0, 0.0, 7.0), Vec3::X);

        let ts = tube.intersect(&ray, Interval::POSITIVE);
        assert_eq!(ts.len(), 2);
        assert!((ts[0] - 1.0).abs() < 1e-5);
        assert!((ts[1] - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_tube_parallel_ray() {
        let tube = Tube::new(z_axis(), 1.0).unwrap();
        let ray = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::Z);
        assert!(tube.intersect(&ray, Interval::POSITIVE).is_empty());
    }

    #[test]
    fn test_tube_normal() {
        let tube = Tube::new(z_axis(), 1.0).unwrap();
        let n = tube.normal_at(Vec3::new(0.0, 1.0, 5.0));
        assert!((n - Vec3::Y).length() < 1e-6);

        // A point level with the axis origin
        let n = tube.normal_at(Vec3::new(1.0, 0.0, 0.0));
        assert!((n - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_cylinder_rejects_bad_height() {
        assert_eq!(
            Cylinder::new(z_axis(), 1.0, -1.0),
            Err(GeometryError::NonPositiveHeight(-1.0))
        );
    }

    #[test]
    fn test_cylinder_side_hits() {
        let cylinder = Cylinder::new(z_axis(), 1.0, 2.0).unwrap();
        let ray = Ray::new(Vec3::new(-2.0, 0.0, 1.0), Vec3::X);

        let ts = cylinder.intersect(&ray, Interval::POSITIVE);
        assert_eq!(ts.len(), 2);
        assert!((ts[0] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cylinder_misses_above() {
        let cylinder = Cylinder::new(z_axis(), 1.0, 2.0).unwrap();
        let ray = Ray::new(Vec3::new(-2.0, 0.0, 5.0), Vec3::X);
        assert!(cylinder.intersect(&ray, Interval::POSITIVE).is_empty());
    }

    #[test]
    fn test_cylinder_cap_hits() {
        let cylinder = Cylinder::new(z_axis(), 1.0, 2.0).unwrap();
        let ray = Ray::new(Vec3::new(0.2, 0.0, -1.0), Vec3::Z);

        let ts = cylinder.intersect(&ray, Interval::POSITIVE);
        assert_eq!(ts.len(), 2);
        assert!((ts[0] - 1.0).abs() < 1e-5);
        assert!((ts[1] - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_cylinder_cap_normals() {
        let cylinder = Cylinder::new(z_axis(), 1.0, 2.0).unwrap();
        assert_eq!(cylinder.normal_at(Vec3::new(0.2, 0.0, 0.0)), -Vec3::Z);
        assert_eq!(cylinder.normal_at(Vec3::new(0.5, 0.0, 2.0)), Vec3::Z);
        assert!((cylinder.normal_at(Vec3::new(1.0, 0.0, 1.0)) - Vec3::X).length() < 1e-6);
    }
}
