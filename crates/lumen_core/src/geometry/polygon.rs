//! Convex planar polygon (triangles included).

use lumen_math::{align_zero, unit, Interval, Ray, Vec3, EPSILON};

use super::{GeometryError, GeometryResult, Intersectable, Plane};

/// A convex polygon. Vertices are ordered along the edge path.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec3>,
    plane: Plane,
}

impl Polygon {
    /// Create a polygon from its vertices.
    ///
    /// Fails when there are fewer than 3 vertices, consecutive vertices
    /// coincide, three consecutive vertices are collinear, the vertices are
    /// not coplanar, or the polygon is not convex.
    pub fn new(vertices: Vec<Vec3>) -> GeometryResult<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        if vertices.len() == 3 {
            return Ok(Self { vertices, plane });
        }

        let n = plane.normal();
        let count = vertices.len();

        // Orientation of the turn from the last edge into the first one; every
        // other turn must agree with it for the polygon to be convex.
        let mut edge1 = unit(vertices[count - 1] - vertices[count - 2])?;
        let mut edge2 = unit(vertices[0] - vertices[count - 1])?;
        let positive = unit(edge1.cross(edge2))?.dot(n) > 0.0;

        for i in 1..count {
            let offset = vertices[i] - vertices[0];
            if offset.dot(n).abs() > EPSILON * offset.length().max(1.0) {
                return Err(GeometryError::NotCoplanar);
            }

            edge1 = edge2;
            edge2 = unit(vertices[i] - vertices[i - 1])?;
            if positive != (unit(edge1.cross(edge2))?.dot(n) > 0.0) {
                return Err(GeometryError::NotConvex);
            }
        }

        Ok(Self { vertices, plane })
    }

    /// Create a triangle.
    pub fn triangle(a: Vec3, b: Vec3, c: Vec3) -> GeometryResult<Self> {
        Self::new(vec![a, b, c])
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }
}

impl Intersectable for Polygon {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f32> {
        let ts = self.plane.intersect(ray, ray_t);
        if ts.is_empty() {
            return ts;
        }

        // The plane hit is inside the polygon when the ray passes on the same
        // side of every edge, as seen from the ray origin.
        let p0 = ray.origin();
        let v = ray.direction();
        let count = self.vertices.len();
        let mut sign = 0.0_f32;

        for i in 0..count {
            let a = self.vertices[i] - p0;
            let b = self.vertices[(i + 1) % count] - p0;
            let side = align_zero(v.dot(a.cross(b).normalize_or_zero()));

            // On an edge (or its extension through the origin): not inside
            if side == 0.0 {
                return Vec::new();
            }
            if sign == 0.0 {
                sign = side;
            } else if sign * side < 0.0 {
                return Vec::new();
            }
        }

        ts
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.plane.normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::new(vec![
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-1.0, 1.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_valid_quad() {
        let polygon = square();
        let expected = 1.0 / 3.0_f32.sqrt();
        let n = polygon.normal_at(Vec3::new(0.0, 0.0, 1.0));
        assert!((n.abs() - Vec3::splat(expected)).length() < 1e-5);
    }

    #[test]
    fn test_too_few_vertices() {
        let result = Polygon::new(vec![Vec3::ZERO, Vec3::X]);
        assert_eq!(result, Err(GeometryError::TooFewVertices(2)));
    }

    #[test]
    fn test_wrong_vertex_order() {
        let result = Polygon::new(vec![
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 1.0, 1.0),
        ]);
        assert_eq!(result, Err(GeometryError::NotConvex));
    }

    #[test]
    fn test_not_in_same_plane() {
        let result = Polygon::new(vec![
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 2.0, 2.0),
        ]);
        assert_eq!(result, Err(GeometryError::NotCoplanar));
    }

    #[test]
    fn test_concave_quad() {
        let result = Polygon::new(vec![
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.5, 0.25, 0.25),
        ]);
        assert_eq!(result, Err(GeometryError::NotConvex));
    }

    #[test]
    fn test_duplicate_vertex() {
        let result = Polygon::new(vec![
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]);
        assert!(matches!(result, Err(GeometryError::InvalidOperand(_))));
    }

    #[test]
    fn test_triangle_inside() {
        let tri = Polygon::triangle(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        )
        .unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let ts = tri.intersect(&ray, Interval::POSITIVE);
        assert_eq!(ts.len(), 1);
        assert!((ts[0] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_triangle_outside() {
        let tri = Polygon::triangle(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        )
        .unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(3.0, 3.0, -1.0));

        assert!(tri.intersect(&ray, Interval::POSITIVE).is_empty());
    }

    #[test]
    fn test_triangle_on_vertex_is_not_a_hit() {
        let tri = Polygon::triangle(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        )
        .unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, -1.0));

        assert!(tri.intersect(&ray, Interval::POSITIVE).is_empty());
    }
}
