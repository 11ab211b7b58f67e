//! Camera for ray generation.
//!
//! A view plane sits `distance` units in front of the camera position,
//! spanned by the `right` and `up` vectors. Rays leave the position (or a
//! point on the aperture disk when depth of field is enabled) and pass
//! through points on that plane.

use lumen_core::Color;
use lumen_math::{is_zero, unit, Ray, Vec2, Vec3};
use rand::{Rng, RngCore};
use serde::Deserialize;
use thiserror::Error;

/// Corner order of an adaptive-sampling cell, as (right, up) signs.
pub const CORNER_SIGNS: [(f32, f32); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// Errors raised while building a camera.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("Invalid camera configuration: {0}")]
    InvalidConfiguration(String),
}

pub type CameraResult<T> = Result<T, CameraError>;

/// Thin-lens settings.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct DepthOfField {
    /// Radius of the aperture disk around the camera position
    pub aperture_radius: f32,
    /// Distance from the camera to the plane of perfect focus
    pub focal_distance: f32,
}

/// Camera configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    /// View plane width in scene units
    pub width: f32,
    /// View plane height in scene units
    pub height: f32,
    /// Distance from the position to the view plane
    pub distance: f32,
    pub depth_of_field: Option<DepthOfField>,
    /// Randomize the sample point within each pixel
    pub jitter: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            width: 1.0,
            height: 1.0,
            distance: 1.0,
            depth_of_field: None,
            jitter: true,
        }
    }
}

/// Camera for generating rays into the scene.
#[derive(Clone, Debug)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    up: Vec3,
    right: Vec3,
    width: f32,
    height: f32,
    distance: f32,
    depth_of_field: Option<DepthOfField>,
    jitter: bool,
}

fn invalid(message: impl Into<String>) -> CameraError {
    CameraError::InvalidConfiguration(message.into())
}

impl Camera {
    /// Build a camera, validating the configuration.
    ///
    /// `up` and `forward` are normalized and must be orthogonal; `right` is
    /// always derived as `forward × up`.
    pub fn new(config: CameraConfig) -> CameraResult<Self> {
        let forward = unit(config.forward).map_err(|_| invalid("forward vector must be non-zero"))?;
        let up = unit(config.up).map_err(|_| invalid("up vector must be non-zero"))?;
        if !is_zero(forward.dot(up)) {
            return Err(invalid("up and forward vectors must be orthogonal"));
        }

        for (name, value) in [
            ("view plane width", config.width),
            ("view plane height", config.height),
            ("view plane distance", config.distance),
        ] {
            if !(value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if let Some(dof) = config.depth_of_field {
            if !(dof.aperture_radius > 0.0) {
                return Err(invalid(format!(
                    "aperture radius must be positive, got {}",
                    dof.aperture_radius
                )));
            }
            if !(dof.focal_distance > 0.0) {
                return Err(invalid(format!(
                    "focal distance must be positive, got {}",
                    dof.focal_distance
                )));
            }
        }

        let right = forward.cross(up).normalize();

        log::debug!(
            "Camera at {:?} looking {:?}, view plane {}x{} at {}",
            config.position,
            forward,
            config.width,
            config.height,
            config.distance
        );

        Ok(Self {
            position: config.position,
            forward,
            up,
            right,
            width: config.width,
            height: config.height,
            distance: config.distance,
            depth_of_field: config.depth_of_field,
            jitter: config.jitter,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// View plane size as (width, height).
    pub fn view_plane_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn view_plane_distance(&self) -> f32 {
        self.distance
    }

    pub fn depth_of_field(&self) -> Option<&DepthOfField> {
        self.depth_of_field.as_ref()
    }

    pub fn jitter(&self) -> bool {
        self.jitter
    }

    /// Size of one pixel on the view plane for an `nx` by `ny` image.
    pub fn pixel_size(&self, nx: u32, ny: u32) -> Vec2 {
        Vec2::new(self.width / nx as f32, self.height / ny as f32)
    }

    /// Center of pixel (`col`, `row`) on the view plane. Row 0 is the top.
    pub fn pixel_center(&self, nx: u32, ny: u32, col: u32, row: u32) -> Vec3 {
        let size = self.pixel_size(nx, ny);
        let y_i = -(row as f32 - (ny as f32 - 1.0) / 2.0) * size.y;
        let x_j = (col as f32 - (nx as f32 - 1.0) / 2.0) * size.x;

        self.position + self.forward * self.distance + self.right * x_j + self.up * y_i
    }

    /// Generate a ray through pixel (`col`, `row`).
    ///
    /// With jitter enabled the sample point moves uniformly within half a
    /// pixel of the center.
    pub fn construct_ray_through_pixel(
        &self,
        nx: u32,
        ny: u32,
        col: u32,
        row: u32,
        rng: &mut dyn RngCore,
    ) -> Ray {
        let mut point = self.pixel_center(nx, ny, col, row);
        if self.jitter {
            let half = self.pixel_size(nx, ny) / 2.0;
            point += self.right * (sample_signed(rng) * half.x) + self.up * (sample_signed(rng) * half.y);
        }
        self.construct_ray_through_point(point, rng)
    }

    /// Generate a ray through a point on the view plane.
    pub fn construct_ray_through_point(&self, point: Vec3, rng: &mut dyn RngCore) -> Ray {
        let ray = Ray::new(self.position, point - self.position);
        match &self.depth_of_field {
            Some(dof) => self.construct_ray_through_pixel_dof(point, ray.direction(), dof, rng),
            None => ray,
        }
    }

    /// Generate a thin-lens ray.
    ///
    /// The ray starts on the aperture disk and passes through the point where
    /// the pinhole ray `direction` through `pixel_point` meets the focal
    /// distance.
    pub fn construct_ray_through_pixel_dof(
        &self,
        pixel_point: Vec3,
        direction: Vec3,
        dof: &DepthOfField,
        rng: &mut dyn RngCore,
    ) -> Ray {
        let focal_point = pixel_point + direction * (dof.focal_distance - self.distance);
        let aperture_point = self.sample_aperture(dof.aperture_radius, rng);
        Ray::new(aperture_point, focal_point - aperture_point)
    }

    /// Corner points of an adaptive-sampling cell at `depth`, in
    /// [`CORNER_SIGNS`] order. The half-extent is `pixel / 2^depth`.
    pub fn cell_corners(&self, center: Vec3, pixel: Vec2, depth: u32) -> [Vec3; 4] {
        let half = pixel / 2f32.powi(depth as i32);
        CORNER_SIGNS.map(|(sx, sy)| center + self.right * (sx * half.x) + self.up * (sy * half.y))
    }

    /// Centers of the four quadrants of a cell at `depth`, in
    /// [`CORNER_SIGNS`] order.
    pub fn sub_cell_centers(&self, center: Vec3, pixel: Vec2, depth: u32) -> [Vec3; 4] {
        let offset = pixel / 2f32.powi(depth as i32 + 1);
        CORNER_SIGNS.map(|(sx, sy)| center + self.right * (sx * offset.x) + self.up * (sy * offset.y))
    }

    /// Rays through the corners of a cell whose color is not yet known.
    ///
    /// Known corners get `None`.
    pub fn construct_corner_rays(
        &self,
        center: Vec3,
        pixel: Vec2,
        depth: u32,
        known: &[Option<Color>; 4],
        rng: &mut dyn RngCore,
    ) -> [Option<Ray>; 4] {
        let corners = self.cell_corners(center, pixel, depth);
        let mut rays = [None; 4];
        for (i, corner) in corners.into_iter().enumerate() {
            if known[i].is_none() {
                rays[i] = Some(self.construct_ray_through_point(corner, rng));
            }
        }
        rays
    }

    /// Sample a point on the aperture disk by rejection.
    fn sample_aperture(&self, radius: f32, rng: &mut dyn RngCore) -> Vec3 {
        loop {
            let x = sample_signed(rng) * radius;
            let y = sample_signed(rng) * radius;
            if x * x + y * y <= radius * radius {
                return self.position + self.right * x + self.up * y;
            }
        }
    }
}

/// Uniform sample in [-1, 1].
fn sample_signed(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>() * 2.0 - 1.0
}
