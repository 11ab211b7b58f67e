//! Scene aggregate: everything the shading engine reads while rendering.

use crate::geometry::{Geometries, Geometry};
use crate::light::{AmbientLight, LightSource};
use crate::material::Color;

/// A complete scene: background, ambient light, surfaces and lights.
///
/// Assembled before rendering and only read afterwards, so a `&Scene` can be
/// shared between render threads without locking.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Scene name (usually from filename)
    pub name: String,

    /// Color of rays that hit nothing
    pub background: Color,

    /// Constant term added to every primary hit
    pub ambient_light: AmbientLight,

    /// Every surface in the scene
    pub geometries: Geometries,

    /// Direct light sources
    pub lights: Vec<LightSource>,
}

impl Scene {
    /// Create an empty scene with a black background and no ambient light.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the ambient light.
    pub fn with_ambient_light(mut self, ambient_light: AmbientLight) -> Self {
        self.ambient_light = ambient_light;
        self
    }

    /// Add a surface.
    pub fn add_geometry(&mut self, geometry: Geometry) {
        self.geometries.add(geometry);
    }

    /// Add a light source.
    pub fn add_light(&mut self, light: impl Into<LightSource>) {
        self.lights.push(light.into());
    }

    /// Get surface count.
    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Sphere;
    use crate::light::PointLight;
    use lumen_math::Vec3;

    #[test]
    fn test_scene_creation() {
        let mut scene = Scene::new("test")
            .with_background(Color::new(0.1, 0.2, 0.3))
            .with_ambient_light(AmbientLight::new(Color::ONE, 0.15));

        scene.add_geometry(Geometry::new(Sphere::new(Vec3::ZERO, 1.0).unwrap()));
        scene.add_light(PointLight::new(Color::ONE, Vec3::Y));

        assert_eq!(scene.name, "test");
        assert_eq!(scene.geometry_count(), 1);
        assert_eq!(scene.light_count(), 1);
        assert!((scene.ambient_light.intensity() - Color::splat(0.15)).length() < 1e-6);
    }

    #[test]
    fn test_default_scene_is_black() {
        let scene = Scene::new("empty");
        assert_eq!(scene.background, Color::ZERO);
        assert_eq!(scene.ambient_light.intensity(), Color::ZERO);
        assert!(scene.geometries.is_empty());
    }
}
