//! Lumen Core - Scene model for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry**: spheres, planes, convex polygons, tubes and cylinders
//!   behind one [`Geometry`] type, plus the brute-force [`Geometries`] list
//! - **Lights and materials**: ambient, directional, point and spot lights;
//!   Phong materials with reflection and transparency factors
//! - **Scene descriptions**: JSON scene loading
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scenes/spheres.json")?;
//! println!("Loaded {} geometries, {} lights",
//!     scene.geometry_count(),
//!     scene.light_count());
//! ```

pub mod description;
pub mod geometry;
pub mod light;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use description::{load_scene, load_scene_from_str, SceneDescription, SceneError, SceneResult};
pub use geometry::{
    Cylinder, Geometries, Geometry, GeometryError, GeometryResult, Hit, Intersectable, Plane,
    Polygon, Shape, Sphere, Tube,
};
pub use light::{AmbientLight, Attenuation, DirectionalLight, LightSource, PointLight, SpotLight};
pub use material::{Color, Material};
pub use scene::Scene;
