//! Phong-style surface material.

use lumen_math::Vec3;
use serde::Deserialize;

/// Color type alias (linear RGB, 0-1 for display, unbounded while shading)
pub type Color = Vec3;

/// Surface response coefficients.
///
/// The coefficients are independent sliders. They are not required to sum to
/// one and are not range checked; values outside [0, 1] are accepted but give
/// physically meaningless results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Diffuse factor
    pub kd: f32,

    /// Specular factor
    pub ks: f32,

    /// Specular exponent
    pub shininess: u32,

    /// Transparency: fraction of light passing through the surface
    pub kt: f32,

    /// Reflectivity: fraction of light mirrored off the surface
    pub kr: f32,
}

impl Material {
    /// A purely local (diffuse + specular) material.
    pub fn phong(kd: f32, ks: f32, shininess: u32) -> Self {
        Self {
            kd,
            ks,
            shininess,
            ..Default::default()
        }
    }

    /// Set the transparency factor.
    pub fn with_kt(mut self, kt: f32) -> Self {
        self.kt = kt;
        self
    }

    /// Set the reflectivity factor.
    pub fn with_kr(mut self, kr: f32) -> Self {
        self.kr = kr;
        self
    }

    /// True if rays hitting this material spawn reflected or refracted rays.
    pub fn has_global_effects(&self) -> bool {
        self.kr != 0.0 || self.kt != 0.0
    }
}
