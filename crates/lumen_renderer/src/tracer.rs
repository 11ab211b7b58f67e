//! Recursive Whitted-style shading.
//!
//! Each hit gets its emission, Phong diffuse and specular terms for every
//! light (attenuated by transparent occluders), and then reflected and
//! transmitted rays while the accumulated attenuation stays above
//! [`TraceLimits::min_k`].

use lumen_core::{Color, Hit, LightSource, Material, Scene};
use lumen_math::{align_zero, Interval, Ray, Vec3};
use serde::Deserialize;

/// Maximum recursion level of [`BasicRayTracer::calc_color`].
pub const MAX_CALC_COLOR_LEVEL: u32 = 10;

/// Attenuation below which a contribution is dropped.
pub const MIN_CALC_COLOR_K: f32 = 0.001;

/// Anything that turns a ray into a color.
pub trait RayTracer: Send + Sync {
    fn trace_ray(&self, ray: &Ray) -> Color;
}

/// Recursion cut-offs.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TraceLimits {
    /// Deepest level of reflection/refraction (1 = local shading only)
    pub max_level: u32,
    /// Minimum accumulated attenuation worth tracing
    pub min_k: f32,
}

impl Default for TraceLimits {
    fn default() -> Self {
        Self {
            max_level: MAX_CALC_COLOR_LEVEL,
            min_k: MIN_CALC_COLOR_K,
        }
    }
}

/// Ray tracer with local Phong lighting, shadows, reflection and refraction.
pub struct BasicRayTracer<'a> {
    scene: &'a Scene,
    limits: TraceLimits,
}

impl<'a> BasicRayTracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            limits: TraceLimits::default(),
        }
    }

    /// Set the recursion cut-offs.
    pub fn with_limits(mut self, limits: TraceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> TraceLimits {
        self.limits
    }

    /// Color of a hit: emission plus local lighting, plus reflected and
    /// refracted light above level 1.
    pub fn calc_color(&self, hit: &Hit<'_>, ray: &Ray, level: u32, k: f32) -> Color {
        let color = hit.geometry.emission() + self.calc_local_effects(hit, ray, k);
        if level <= 1 {
            color
        } else {
            color + self.calc_global_effects(hit, ray, level, k)
        }
    }

    /// Diffuse and specular light from every light source.
    pub fn calc_local_effects(&self, hit: &Hit<'_>, ray: &Ray, k: f32) -> Color {
        let v = ray.direction();
        let n = hit.geometry.normal_at(hit.point);
        let nv = align_zero(n.dot(v));
        if nv == 0.0 {
            return Color::ZERO;
        }

        let material = hit.geometry.material();
        let mut color = Color::ZERO;

        for light in &self.scene.lights {
            let l = light.direction_to(hit.point);
            let nl = align_zero(n.dot(l));
            // Light and viewer must be on the same side of the surface
            if nl * nv <= 0.0 {
                continue;
            }

            let ktr = self.transparency(light, l, n, hit);
            if ktr * k > self.limits.min_k {
                let intensity = light.intensity_at(hit.point) * ktr;
                color += intensity * (diffuse(material, nl) + specular(material, n, l, nl, v));
            }
        }

        color
    }

    /// Fraction of a light's intensity reaching the hit point through the
    /// surfaces between them.
    ///
    /// `l` points from the light to the hit. Returns 0 once the product of
    /// transparencies falls below the minimum attenuation.
    pub fn transparency(&self, light: &LightSource, l: Vec3, n: Vec3, hit: &Hit<'_>) -> f32 {
        let shadow_ray = Ray::offset(hit.point, -l, n);
        let range = Interval::up_to(light.distance_to(hit.point));

        let mut ktr = 1.0;
        for occluder in self.scene.geometries.find_geo_intersections(&shadow_ray, range) {
            ktr *= occluder.geometry.material().kt;
            if ktr < self.limits.min_k {
                return 0.0;
            }
        }
        ktr
    }

    /// Reflected and refracted contributions.
    pub fn calc_global_effects(&self, hit: &Hit<'_>, ray: &Ray, level: u32, k: f32) -> Color {
        let material = hit.geometry.material();
        if !material.has_global_effects() {
            return Color::ZERO;
        }

        let v = ray.direction();
        let n = hit.geometry.normal_at(hit.point);
        let mut color = Color::ZERO;

        let kkr = k * material.kr;
        if kkr > self.limits.min_k {
            let reflected = Ray::offset(hit.point, v - n * (2.0 * v.dot(n)), n);
            color += self.calc_global_effect(&reflected, level, material.kr, kkr);
        }

        let kkt = k * material.kt;
        if kkt > self.limits.min_k {
            // Transmitted rays keep their direction
            let refracted = Ray::offset(hit.point, v, n);
            color += self.calc_global_effect(&refracted, level, material.kt, kkt);
        }

        color
    }

    /// Color seen along a secondary ray, scaled by `kx`.
    pub fn calc_global_effect(&self, ray: &Ray, level: u32, kx: f32, kkx: f32) -> Color {
        let color = match self.scene.geometries.find_closest_intersection(ray) {
            Some(hit) => self.calc_color(&hit, ray, level.saturating_sub(1), kkx),
            None => self.scene.background,
        };
        color * kx
    }
}

impl RayTracer for BasicRayTracer<'_> {
    fn trace_ray(&self, ray: &Ray) -> Color {
        match self.scene.geometries.find_closest_intersection(ray) {
            Some(hit) => {
                self.calc_color(&hit, ray, self.limits.max_level, 1.0)
                    + self.scene.ambient_light.intensity()
            }
            None => self.scene.background,
        }
    }
}

#[inline]
fn diffuse(material: &Material, nl: f32) -> f32 {
    material.kd * nl.abs()
}

#[inline]
fn specular(material: &Material, n: Vec3, l: Vec3, nl: f32, v: Vec3) -> f32 {
    let r = l - n * (2.0 * nl);
    let minus_vr = align_zero(-v.dot(r));
    if minus_vr <= 0.0 {
        return 0.0;
    }
    material.ks * minus_vr.powi(material.shininess as i32)
}
