//! Scene surfaces and ray intersection.
//!
//! Every surface is a [`Geometry`]: a [`Shape`] variant plus the emission
//! color and [`Material`] the shading engine reads at a hit point.
//! [`Geometries`] is the flat, brute-force collection the tracer queries.

mod plane;
mod polygon;
mod sphere;
mod tube;

pub use plane::Plane;
pub use polygon::Polygon;
pub use sphere::Sphere;
pub use tube::{Cylinder, Tube};

use lumen_math::{Interval, MathError, Ray, Vec3};
use thiserror::Error;

use crate::material::{Color, Material};

/// Errors raised while constructing geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error(transparent)]
    InvalidOperand(#[from] MathError),

    #[error("A polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("All vertices of a polygon must lie in the same plane")]
    NotCoplanar,

    #[error("Polygon vertices must be ordered along the edge path and convex")]
    NotConvex,

    #[error("Radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("Height must be positive, got {0}")]
    NonPositiveHeight(f32),
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Ray intersection for a bare shape.
pub trait Intersectable {
    /// Ray parameters of every crossing of the shape within `ray_t`.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f32>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;
}

/// The shape variants a [`Geometry`] can take.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Polygon(Polygon),
    Tube(Tube),
    Cylinder(Cylinder),
}

impl Intersectable for Shape {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Vec<f32> {
        match self {
            Shape::Sphere(s) => s.intersect(ray, ray_t),
            Shape::Plane(p) => p.intersect(ray, ray_t),
            Shape::Polygon(p) => p.intersect(ray, ray_t),
            Shape::Tube(t) => t.intersect(ray, ray_t),
            Shape::Cylinder(c) => c.intersect(ray, ray_t),
        }
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(s) => s.normal_at(point),
            Shape::Plane(p) => p.normal_at(point),
            Shape::Polygon(p) => p.normal_at(point),
            Shape::Tube(t) => t.normal_at(point),
            Shape::Cylinder(c) => c.normal_at(point),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Shape::Plane(p)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

impl From<Tube> for Shape {
    fn from(t: Tube) -> Self {
        Shape::Tube(t)
    }
}

impl From<Cylinder> for Shape {
    fn from(c: Cylinder) -> Self {
        Shape::Cylinder(c)
    }
}

/// A renderable surface: shape, emission and material.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    shape: Shape,
    emission: Color,
    material: Material,
}

impl Geometry {
    /// Create a black, all-zero-material surface.
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            emission: Color::ZERO,
            material: Material::default(),
        }
    }

    /// Set the emitted color.
    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    /// Set the material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn emission(&self) -> Color {
        self.emission
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        self.shape.normal_at(point)
    }

    /// Every hit of `ray` on this surface within `ray_t`.
    pub fn find_geo_intersections(&self, ray: &Ray, ray_t: Interval) -> Vec<Hit<'_>> {
        self.shape
            .intersect(ray, ray_t)
            .into_iter()
            .map(|t| Hit {
                geometry: self,
                point: ray.at(t),
                t,
            })
            .collect()
    }
}

/// A ray/surface intersection.
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    /// The surface that was hit
    pub geometry: &'a Geometry,
    /// Point of intersection
    pub point: Vec3,
    /// Distance from the ray origin (the ray direction is unit length)
    pub t: f32,
}

/// An ordered collection of surfaces, intersected by linear scan.
#[derive(Clone, Debug, Default)]
pub struct Geometries {
    items: Vec<Geometry>,
}

impl Geometries {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a surface. Insertion order is the tie-break order for equidistant hits.
    pub fn add(&mut self, geometry: Geometry) {
        self.items.push(geometry);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Geometry> {
        self.items.iter()
    }

    /// Every hit of `ray` on every surface within `ray_t`, in insertion order.
    pub fn find_geo_intersections(&self, ray: &Ray, ray_t: Interval) -> Vec<Hit<'_>> {
        self.items
            .iter()
            .flat_map(|g| g.find_geo_intersections(ray, ray_t))
            .collect()
    }

    /// The hit nearest to the ray origin, if any.
    ///
    /// When several hits are equally near, the first one found wins.
    pub fn find_closest_intersection(&self, ray: &Ray) -> Option<Hit<'_>> {
        closest(self.find_geo_intersections(ray, Interval::POSITIVE))
    }
}

impl FromIterator<Geometry> for Geometries {
    fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Pick the hit with the smallest distance; strict comparison keeps the first on ties.
pub fn closest(hits: Vec<Hit<'_>>) -> Option<Hit<'_>> {
    let mut best: Option<Hit<'_>> = None;
    for hit in hits {
        match best {
            Some(b) if hit.t >= b.t => {}
            _ => best = Some(hit),
        }
    }
    best
}
