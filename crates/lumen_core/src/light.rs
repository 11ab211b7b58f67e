//! Light sources.
//!
//! [`AmbientLight`] is a constant term added once per primary ray. Every
//! other light is a [`LightSource`] variant, queried per shaded point for its
//! intensity, direction and distance.

use lumen_math::{unit, MathResult, Vec3};

use crate::material::Color;

/// Uniform light reaching every point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AmbientLight {
    intensity: Color,
}

impl AmbientLight {
    /// Ambient light of `color` scaled by the ambient factor `ka`.
    pub fn new(color: Color, ka: f32) -> Self {
        Self {
            intensity: color * ka,
        }
    }

    /// No ambient contribution.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }
}

/// Distance falloff `1 / (kc + kl·d + kq·d²)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attenuation {
    pub kc: f32,
    pub kl: f32,
    pub kq: f32,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
        }
    }
}

impl Attenuation {
    /// Divisor applied to the base intensity at distance `d`.
    pub fn factor(&self, d: f32) -> f32 {
        self.kc + self.kl * d + self.kq * d * d
    }
}

/// Light arriving from one direction everywhere, infinitely far away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    intensity: Color,
    direction: Vec3,
}

impl DirectionalLight {
    /// Fails when `direction` has zero length.
    pub fn new(intensity: Color, direction: Vec3) -> MathResult<Self> {
        Ok(Self {
            intensity,
            direction: unit(direction)?,
        })
    }
}

/// Omnidirectional light at a position, attenuated with distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    intensity: Color,
    position: Vec3,
    attenuation: Attenuation,
}

impl PointLight {
    pub fn new(intensity: Color, position: Vec3) -> Self {
        Self {
            intensity,
            position,
            attenuation: Attenuation::default(),
        }
    }

    pub fn with_kc(mut self, kc: f32) -> Self {
        self.attenuation.kc = kc;
        self
    }

    pub fn with_kl(mut self, kl: f32) -> Self {
        self.attenuation.kl = kl;
        self
    }

    pub fn with_kq(mut self, kq: f32) -> Self {
        self.attenuation.kq = kq;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn attenuation(&self) -> Attenuation {
        self.attenuation
    }

    fn intensity_at(&self, point: Vec3) -> Color {
        let d = self.position.distance(point);
        self.intensity / self.attenuation.factor(d)
    }

    fn direction_to(&self, point: Vec3) -> Vec3 {
        // Zero when the point sits on the light; it then lights nothing
        (point - self.position).normalize_or_zero()
    }
}

/// Point light focused along a direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    light: PointLight,
    direction: Vec3,
}

impl SpotLight {
    /// Fails when `direction` has zero length.
    pub fn new(intensity: Color, position: Vec3, direction: Vec3) -> MathResult<Self> {
        Ok(Self {
            light: PointLight::new(intensity, position),
            direction: unit(direction)?,
        })
    }

    pub fn with_kc(mut self, kc: f32) -> Self {
        self.light = self.light.with_kc(kc);
        self
    }

    pub fn with_kl(mut self, kl: f32) -> Self {
        self.light = self.light.with_kl(kl);
        self
    }

    pub fn with_kq(mut self, kq: f32) -> Self {
        self.light = self.light.with_kq(kq);
        self
    }

    fn intensity_at(&self, point: Vec3) -> Color {
        let focus = self.direction.dot(self.light.direction_to(point)).max(0.0);
        self.light.intensity_at(point) * focus
    }
}

/// A light that illuminates individual points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightSource {
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
}

impl LightSource {
    /// Light intensity arriving at `point`.
    pub fn intensity_at(&self, point: Vec3) -> Color {
        match self {
            LightSource::Directional(l) => l.intensity,
            LightSource::Point(l) => l.intensity_at(point),
            LightSource::Spot(l) => l.intensity_at(point),
        }
    }

    /// Unit vector from the light toward `point`.
    pub fn direction_to(&self, point: Vec3) -> Vec3 {
        match self {
            LightSource::Directional(l) => l.direction,
            LightSource::Point(l) => l.direction_to(point),
            LightSource::Spot(l) => l.light.direction_to(point),
        }
    }

    /// Distance from the light to `point`; infinite for directional lights.
    pub fn distance_to(&self, point: Vec3) -> f32 {
        match self {
            LightSource::Directional(_) => f32::INFINITY,
            LightSource::Point(l) => l.position.distance(point),
            LightSource::Spot(l) => l.light.position.distance(point),
        }
    }
}

impl From<DirectionalLight> for LightSource {
    fn from(l: DirectionalLight) -> Self {
        LightSource::Directional(l)
    }
}

impl From<PointLight> for LightSource {
    fn from(l: PointLight) -> Self {
        LightSource::Point(l)
    }
}

impl From<SpotLight> for LightSource {
    fn from(l: SpotLight) -> Self {
        LightSource::Spot(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_is_scaled() {
        let ambient = AmbientLight::new(Color::new(1.0, 0.5, 0.0), 0.2);
        assert!((ambient.intensity() - Color::new(0.2, 0.1, 0.0)).length() < 1e-6);
        assert_eq!(AmbientLight::none().intensity(), Color::ZERO);
    }

    #[test]
    fn test_point_light_without_falloff() {
        let base = Color::new(0.3, 0.6, 0.9);
        let light: LightSource = PointLight::new(base, Vec3::ZERO).into();

        for d in [0.5, 1.0, 10.0, 1000.0] {
            assert_eq!(light.intensity_at(Vec3::new(d, 0.0, 0.0)), base);
        }
    }

    #[test]
    fn test_point_light_falloff() {
        let light: LightSource = PointLight::new(Color::ONE, Vec3::ZERO)
            .with_kl(0.5)
            .with_kq(0.25)
            .into();

        // 1 + 0.5*2 + 0.25*4 = 3
        let i = light.intensity_at(Vec3::new(0.0, 2.0, 0.0));
        assert!((i - Color::splat(1.0 / 3.0)).length() < 1e-6);
    }

    #[test]
    fn test_point_light_direction_and_distance() {
        let light: LightSource = PointLight::new(Color::ONE, Vec3::new(0.0, 5.0, 0.0)).into();
        let p = Vec3::new(0.0, 1.0, 0.0);

        assert!((light.direction_to(p) - Vec3::NEG_Y).length() < 1e-6);
        assert!((light.distance_to(p) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_directional_light() {
        let light: LightSource = DirectionalLight::new(Color::ONE, Vec3::new(0.0, -2.0, 0.0))
            .unwrap()
            .into();

        assert_eq!(light.direction_to(Vec3::new(7.0, 3.0, 1.0)), Vec3::NEG_Y);
        assert_eq!(light.distance_to(Vec3::ZERO), f32::INFINITY);
        assert_eq!(light.intensity_at(Vec3::splat(100.0)), Color::ONE);
    }

    #[test]
    fn test_directional_light_rejects_zero_direction() {
        assert!(DirectionalLight::new(Color::ONE, Vec3::ZERO).is_err());
    }

    #[test]
    fn test_spot_light_focus() {
        let light: LightSource = SpotLight::new(Color::ONE, Vec3::ZERO, Vec3::NEG_Z)
            .unwrap()
            .into();

        // On axis: full intensity
        let on_axis = light.intensity_at(Vec3::new(0.0, 0.0, -3.0));
        assert!((on_axis - Color::ONE).length() < 1e-6);

        // Behind the spot: nothing
        let behind = light.intensity_at(Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(behind, Color::ZERO);

        // 60 degrees off axis: half
        let off_axis = light.intensity_at(Vec3::new(3.0_f32.sqrt(), 0.0, -1.0));
        assert!((off_axis - Color::splat(0.5)).length() < 1e-5);
    }
}
