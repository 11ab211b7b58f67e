//! Lumen Renderer - Recursive CPU ray tracing
//!
//! A Whitted-style ray tracer: Phong local lighting with transparent
//! shadows, mirror reflection and straight-through transparency.
//!
//! - [`Camera`] builds primary rays, with optional depth of field
//! - [`BasicRayTracer`] shades rays against a [`lumen_core::Scene`]
//! - [`Renderer`] schedules pixels over threads with plain, super-sampled or
//!   adaptive-grid sampling and writes them to an [`ImageSink`]

mod camera;
mod cursor;
mod renderer;
mod sink;
mod tracer;

pub use camera::{Camera, CameraConfig, CameraError, CameraResult, DepthOfField, CORNER_SIGNS};
pub use cursor::{PixelClaim, PixelCursor};
pub use renderer::{
    RenderError, RenderResult, RenderSettings, Renderer, Sampling, DEFAULT_ADAPTIVE_DEPTH,
    DEFAULT_SUPER_SAMPLES,
};
pub use sink::{color_to_rgb, ImageBuffer, ImageSink, ImageWriter};
pub use tracer::{BasicRayTracer, RayTracer, TraceLimits, MAX_CALC_COLOR_LEVEL, MIN_CALC_COLOR_K};

/// Re-export the color type and common math types
pub use lumen_core::Color;
pub use lumen_math::{Ray, Vec3};
