//! JSON scene descriptions.
//!
//! A description is plain data deserialized with serde and then validated
//! into a [`Scene`]: shape constructors run here, so degenerate geometry is
//! rejected before any rendering starts.
//!
//! ```json
//! {
//!   "background": [0.0, 0.0, 0.0],
//!   "ambient": { "color": [1.0, 1.0, 1.0], "ka": 0.15 },
//!   "geometries": [
//!     { "type": "sphere", "center": [0, 0, -3], "radius": 1,
//!       "emission": [0.2, 0.2, 0.8], "material": { "kd": 0.5, "ks": 0.5, "shininess": 30 } }
//!   ],
//!   "lights": [
//!     { "type": "point", "intensity": [1, 1, 1], "position": [5, 5, 0], "kq": 0.001 }
//!   ]
//! }
//! ```

use std::path::Path;

use lumen_math::{MathError, Ray, Vec3};
use serde::Deserialize;
use thiserror::Error;

use crate::geometry::{Cylinder, Geometry, GeometryError, Plane, Polygon, Shape, Sphere, Tube};
use crate::light::{AmbientLight, DirectionalLight, LightSource, PointLight, SpotLight};
use crate::material::{Color, Material};
use crate::scene::Scene;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid geometry #{index}: {source}")]
    Geometry {
        index: usize,
        #[source]
        source: GeometryError,
    },

    #[error("Invalid light #{index}: {source}")]
    Light {
        index: usize,
        #[source]
        source: MathError,
    },
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

/// Ambient light as color and ambient factor.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct AmbientDescription {
    pub color: Color,
    #[serde(default = "default_ka")]
    pub ka: f32,
}

fn default_ka() -> f32 {
    1.0
}

fn default_kc() -> f32 {
    1.0
}

/// One surface of the scene.
#[derive(Clone, Debug, Deserialize)]
pub struct GeometryDescription {
    #[serde(flatten)]
    pub shape: ShapeDescription,
    #[serde(default)]
    pub emission: Color,
    #[serde(default)]
    pub material: Material,
}

/// Shape parameters, tagged by `"type"`.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Sphere {
        center: Vec3,
        radius: f32,
    },
    Plane {
        point: Vec3,
        normal: Vec3,
    },
    Triangle {
        vertices: [Vec3; 3],
    },
    Polygon {
        vertices: Vec<Vec3>,
    },
    Tube {
        origin: Vec3,
        axis: Vec3,
        radius: f32,
    },
    Cylinder {
        origin: Vec3,
        axis: Vec3,
        radius: f32,
        height: f32,
    },
}

/// One light source, tagged by `"type"`.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightDescription {
    Directional {
        intensity: Color,
        direction: Vec3,
    },
    Point {
        intensity: Color,
        position: Vec3,
        #[serde(default = "default_kc")]
        kc: f32,
        #[serde(default)]
        kl: f32,
        #[serde(default)]
        kq: f32,
    },
    Spot {
        intensity: Color,
        position: Vec3,
        direction: Vec3,
        #[serde(default = "default_kc")]
        kc: f32,
        #[serde(default)]
        kl: f32,
        #[serde(default)]
        kq: f32,
    },
}

/// A whole scene as read from JSON.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub background: Color,
    pub ambient: Option<AmbientDescription>,
    pub geometries: Vec<GeometryDescription>,
    pub lights: Vec<LightDescription>,
}

impl ShapeDescription {
    fn build(&self) -> Result<Shape, GeometryError> {
        let shape = match self {
            ShapeDescription::Sphere { center, radius } => Sphere::new(*center, *radius)?.into(),
            ShapeDescription::Plane { point, normal } => Plane::new(*point, *normal)?.into(),
            ShapeDescription::Triangle { vertices: [a, b, c] } => Polygon::triangle(*a, *b, *c)?.into(),
            ShapeDescription::Polygon { vertices } => Polygon::new(vertices.clone())?.into(),
            ShapeDescription::Tube { origin, axis, radius } => {
                Tube::new(Ray::try_new(*origin, *axis)?, *radius)?.into()
            }
            ShapeDescription::Cylinder {
                origin,
                axis,
                radius,
                height,
            } => Cylinder::new(Ray::try_new(*origin, *axis)?, *radius, *height)?.into(),
        };
        Ok(shape)
    }
}

impl LightDescription {
    fn build(&self) -> Result<LightSource, MathError> {
        let light = match *self {
            LightDescription::Directional { intensity, direction } => {
                DirectionalLight::new(intensity, direction)?.into()
            }
            LightDescription::Point {
                intensity,
                position,
                kc,
                kl,
                kq,
            } => PointLight::new(intensity, position)
                .with_kc(kc)
                .with_kl(kl)
                .with_kq(kq)
                .into(),
            LightDescription::Spot {
                intensity,
                position,
                direction,
                kc,
                kl,
                kq,
            } => SpotLight::new(intensity, position, direction)?
                .with_kc(kc)
                .with_kl(kl)
                .with_kq(kq)
                .into(),
        };
        Ok(light)
    }
}

impl SceneDescription {
    /// Validate the description and build the scene.
    pub fn into_scene(self, name: impl Into<String>) -> SceneResult<Scene> {
        let ambient = self
            .ambient
            .map(|a| AmbientLight::new(a.color, a.ka))
            .unwrap_or_default();
        let mut scene = Scene::new(name)
            .with_background(self.background)
            .with_ambient_light(ambient);

        for (index, desc) in self.geometries.iter().enumerate() {
            let shape = desc
                .shape
                .build()
                .map_err(|source| SceneError::Geometry { index, source })?;
            scene.add_geometry(
                Geometry::new(shape)
                    .with_emission(desc.emission)
                    .with_material(desc.material),
            );
        }

        for (index, desc) in self.lights.iter().enumerate() {
            let light = desc
                .build()
                .map_err(|source| SceneError::Light { index, source })?;
            scene.add_light(light);
        }

        if scene.lights.is_empty() && scene.ambient_light.intensity() == Color::ZERO {
            log::warn!("Scene '{}' has no lights; only emission will be visible", scene.name);
        }

        log::info!(
            "Loaded scene '{}': {} geometries, {} lights",
            scene.name,
            scene.geometry_count(),
            scene.light_count()
        );

        Ok(scene)
    }
}

/// Load a scene description from a JSON file.
///
/// The scene is named after the file stem.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");

    let text = std::fs::read_to_string(path)?;
    load_scene_from_str(&text, name)
}

/// Load a scene description from a JSON string.
pub fn load_scene_from_str(json: &str, name: &str) -> SceneResult<Scene> {
    let description: SceneDescription = serde_json::from_str(json)?;
    description.into_scene(name)
}
