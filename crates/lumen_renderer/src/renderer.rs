//! Render scheduler.
//!
//! Turns camera rays into pixels using one of three sampling modes:
//! - Plain: one ray per pixel
//! - Super-sampling: the mean of several jittered rays
//! - Adaptive grid: a quadtree over the pixel that only subdivides where its
//!   corner colors disagree
//!
//! Pixels are rendered on the calling thread or on a fixed rayon pool whose
//! workers pull pixels from a shared [`PixelCursor`].

use std::sync::mpsc;
use std::time::Instant;

use lumen_core::Color;
use lumen_math::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Deserialize;
use thiserror::Error;

use crate::camera::{Camera, CORNER_SIGNS};
use crate::cursor::PixelCursor;
use crate::sink::ImageSink;
use crate::tracer::RayTracer;

/// Rays per pixel when super-sampling without an explicit count.
pub const DEFAULT_SUPER_SAMPLES: u32 = 10;

/// Deepest adaptive subdivision when none is given.
pub const DEFAULT_ADAPTIVE_DEPTH: u32 = 8;

/// Depth of a whole pixel in the adaptive quadtree.
const STARTING_DEPTH: u32 = 1;

/// Errors that stop a render before or after pixel work.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Missing {0}: set it before rendering")]
    MissingConfiguration(&'static str),

    #[error("Invalid render settings: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;

fn default_samples() -> u32 {
    DEFAULT_SUPER_SAMPLES
}

fn default_max_depth() -> u32 {
    DEFAULT_ADAPTIVE_DEPTH
}

/// How rays are distributed over a pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Sampling {
    #[default]
    Plain,
    SuperSampling {
        #[serde(default = "default_samples")]
        samples: u32,
    },
    AdaptiveGrid {
        #[serde(default = "default_max_depth")]
        max_depth: u32,
    },
}

impl Sampling {
    /// Super-sampling with the default ray count.
    pub fn super_sampling() -> Self {
        Sampling::SuperSampling {
            samples: DEFAULT_SUPER_SAMPLES,
        }
    }

    /// Adaptive grid with the default maximum depth.
    pub fn adaptive_grid() -> Self {
        Sampling::AdaptiveGrid {
            max_depth: DEFAULT_ADAPTIVE_DEPTH,
        }
    }
}

/// Render configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Worker threads; 0 renders on the calling thread
    pub threads: usize,
    pub sampling: Sampling,
    /// Log whole-percent progress while rendering
    pub progress: bool,
    /// Base seed for the per-pixel random streams
    pub seed: u64,
}

/// Drives a render: camera rays in, pixels out.
pub struct Renderer<'a> {
    camera: Option<&'a Camera>,
    tracer: Option<&'a dyn RayTracer>,
    sink: Option<&'a dyn ImageSink>,
    settings: RenderSettings,
}

impl<'a> Renderer<'a> {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            camera: None,
            tracer: None,
            sink: None,
            settings,
        }
    }

    pub fn with_camera(mut self, camera: &'a Camera) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn with_tracer(mut self, tracer: &'a dyn RayTracer) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub fn with_sink(mut self, sink: &'a dyn ImageSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Render every pixel of the sink.
    ///
    /// Fails before any pixel work when the sink, camera or tracer is missing
    /// or the sampling settings are unusable.
    pub fn render_image(&self) -> RenderResult<()> {
        let sink = self.sink()?;
        let camera = self
            .camera
            .ok_or(RenderError::MissingConfiguration("camera"))?;
        let tracer = self
            .tracer
            .ok_or(RenderError::MissingConfiguration("ray tracer"))?;
        validate_sampling(self.settings.sampling)?;

        let job = PixelJob {
            camera,
            tracer,
            nx: sink.width(),
            ny: sink.height(),
            sampling: self.settings.sampling,
            seed: self.settings.seed,
        };

        log::info!(
            "Rendering {}x{} with {:?} on {} thread(s)",
            job.nx,
            job.ny,
            job.sampling,
            self.settings.threads.max(1)
        );
        let start = Instant::now();

        if self.settings.threads == 0 {
            self.render_on_caller(&job, sink);
        } else {
            self.render_on_pool(&job, sink)?;
        }

        log::info!("Render complete in {:.2?}", start.elapsed());
        Ok(())
    }

    /// Paint grid lines every `interval` pixels, starting at row and column 0.
    pub fn print_grid(&self, interval: u32, color: Color) -> RenderResult<()> {
        let sink = self.sink()?;
        if interval == 0 {
            return Err(RenderError::InvalidConfiguration(
                "grid interval must be positive".to_string(),
            ));
        }

        for row in 0..sink.height() {
            for col in 0..sink.width() {
                if col % interval == 0 || row % interval == 0 {
                    sink.write_pixel(col, row, color);
                }
            }
        }
        Ok(())
    }

    /// Persist the sink.
    pub fn write_to_image(&self) -> RenderResult<()> {
        self.sink()?.persist()?;
        Ok(())
    }

    fn sink(&self) -> RenderResult<&'a dyn ImageSink> {
        self.sink
            .ok_or(RenderError::MissingConfiguration("image sink"))
    }

    fn render_on_caller(&self, job: &PixelJob<'_>, sink: &dyn ImageSink) {
        let cursor = PixelCursor::new(job.nx, job.ny).with_progress(self.settings.progress);
        render_claims(job, sink, &cursor, &mut |percent| {
            log::info!("Rendering: {}%", percent)
        });
    }

    fn render_on_pool(&self, job: &PixelJob<'_>, sink: &dyn ImageSink) -> RenderResult<()> {
        let threads = self.settings.threads;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("lumen-render-{i}"))
            .build()?;
        log::debug!("Created render pool with {} threads", threads);

        let cursor = PixelCursor::new(job.nx, job.ny).with_progress(self.settings.progress);
        let (progress_tx, progress_rx) = mpsc::channel::<u32>();

        pool.in_place_scope(|scope| {
            for _ in 0..threads {
                let cursor = &cursor;
                let progress_tx = progress_tx.clone();
                scope.spawn(move |_| {
                    // The receiver outlives every worker
                    render_claims(job, sink, cursor, &mut |percent| {
                        let _ = progress_tx.send(percent);
                    });
                });
            }

            // Progress is logged by the calling thread only
            drop(progress_tx);
            for percent in progress_rx {
                log::info!("Rendering: {}%", percent);
            }
        });

        log::debug!("Rendered {} of {} pixels", cursor.claimed(), cursor.total());
        Ok(())
    }
}

/// Render pixels from `cursor` until it runs dry, passing on progress.
fn render_claims(
    job: &PixelJob<'_>,
    sink: &dyn ImageSink,
    cursor: &PixelCursor,
    on_progress: &mut dyn FnMut(u32),
) {
    while let Some(claim) = cursor.advance() {
        sink.write_pixel(claim.col, claim.row, job.color(claim.col, claim.row));
        if let Some(percent) = claim.progress {
            on_progress(percent);
        }
    }
}

fn validate_sampling(sampling: Sampling) -> RenderResult<()> {
    match sampling {
        Sampling::SuperSampling { samples: 0 } => Err(RenderError::InvalidConfiguration(
            "super-sampling needs at least one sample".to_string(),
        )),
        Sampling::AdaptiveGrid { max_depth } if max_depth < STARTING_DEPTH => {
            Err(RenderError::InvalidConfiguration(format!(
                "adaptive grid depth must be at least {STARTING_DEPTH}, got {max_depth}"
            )))
        }
        _ => Ok(()),
    }
}

/// Everything needed to color one pixel; shared read-only by render threads.
struct PixelJob<'a> {
    camera: &'a Camera,
    tracer: &'a dyn RayTracer,
    nx: u32,
    ny: u32,
    sampling: Sampling,
    seed: u64,
}

impl PixelJob<'_> {
    fn color(&self, col: u32, row: u32) -> Color {
        // One random stream per pixel keeps results independent of which
        // thread renders it
        let mut rng = StdRng::seed_from_u64(pixel_seed(self.seed, col, row));

        match self.sampling {
            Sampling::Plain => self.tracer.trace_ray(
                &self
                    .camera
                    .construct_ray_through_pixel(self.nx, self.ny, col, row, &mut rng),
            ),
            Sampling::SuperSampling { samples } => {
                let sum: Color = (0..samples)
                    .map(|_| {
                        let ray = self
                            .camera
                            .construct_ray_through_pixel(self.nx, self.ny, col, row, &mut rng);
                        self.tracer.trace_ray(&ray)
                    })
                    .sum();
                sum / samples as f32
            }
            Sampling::AdaptiveGrid { max_depth } => {
                let center = self.camera.pixel_center(self.nx, self.ny, col, row);
                let pixel = self.camera.pixel_size(self.nx, self.ny);
                let (color, _) = adaptive_cell(
                    self.camera,
                    self.tracer,
                    center,
                    pixel,
                    STARTING_DEPTH,
                    max_depth,
                    [None; 4],
                    &mut rng,
                );
                color
            }
        }
    }
}

fn pixel_seed(seed: u64, col: u32, row: u32) -> u64 {
    seed ^ (((row as u64) << 32) | col as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Lattice coordinate (0, 1 or 2) of a sub-cell corner along one axis.
///
/// The 3x3 lattice holds the cell corners, the edge midpoints and the center.
fn lattice_index(quadrant: f32, corner: f32) -> usize {
    (1.0 + (quadrant + corner) / 2.0) as usize
}

/// Adaptive sampling of one cell of the pixel quadtree.
///
/// `known` carries corner colors already traced by the parent or a sibling,
/// in [`CORNER_SIGNS`] order. Returns the cell color and all four corner
/// colors. A cell whose corners are exactly equal takes that color without
/// subdividing; otherwise it splits into quadrants until `max_depth`, where
/// it averages its corners.
#[allow(clippy::too_many_arguments)]
fn adaptive_cell(
    camera: &Camera,
    tracer: &dyn RayTracer,
    center: Vec3,
    pixel: Vec2,
    depth: u32,
    max_depth: u32,
    known: [Option<Color>; 4],
    rng: &mut dyn RngCore,
) -> (Color, [Color; 4]) {
    let rays = camera.construct_corner_rays(center, pixel, depth, &known, rng);
    let corners: [Color; 4] = std::array::from_fn(|i| match (known[i], rays[i]) {
        (Some(color), _) => color,
        (None, Some(ray)) => tracer.trace_ray(&ray),
        // Every unknown corner gets a ray
        (None, None) => Color::ZERO,
    });

    if corners.iter().all(|&c| c == corners[0]) {
        return (corners[0], corners);
    }
    if depth >= max_depth {
        return (corners.into_iter().sum::<Color>() / 4.0, corners);
    }

    let mut lattice = [[None; 3]; 3];
    for (&(sx, sy), &color) in CORNER_SIGNS.iter().zip(&corners) {
        lattice[lattice_index(sx, sx)][lattice_index(sy, sy)] = Some(color);
    }

    let centers = camera.sub_cell_centers(center, pixel, depth);
    let mut sum = Color::ZERO;
    for (&(qx, qy), &sub_center) in CORNER_SIGNS.iter().zip(&centers) {
        let sub_known = CORNER_SIGNS.map(|(cx, cy)| lattice[lattice_index(qx, cx)][lattice_index(qy, cy)]);
        let (color, sub_corners) = adaptive_cell(
            camera,
            tracer,
            sub_center,
            pixel,
            depth + 1,
            max_depth,
            sub_known,
            rng,
        );

        for (&(cx, cy), &corner) in CORNER_SIGNS.iter().zip(&sub_corners) {
            lattice[lattice_index(qx, cx)][lattice_index(qy, cy)] = Some(corner);
        }
        sum += color;
    }

    (sum / 4.0, corners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraConfig;
    use crate::sink::ImageBuffer;
    use crate::tracer::BasicRayTracer;
    use lumen_core::{AmbientLight, Geometry, Material, PointLight, Scene, Sphere};
    use lumen_math::Ray;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns one color for every ray and counts the calls.
    struct ConstantTracer {
        color: Color,
        calls: AtomicUsize,
    }

    impl ConstantTracer {
        fn new(color: Color) -> Self {
            Self {
                color,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl RayTracer for ConstantTracer {
        fn trace_ray(&self, _ray: &Ray) -> Color {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.color
        }
    }

    /// Red to the right of the view axis, green elsewhere.
    struct SplitTracer {
        calls: AtomicUsize,
    }

    impl RayTracer for SplitTracer {
        fn trace_ray(&self, ray: &Ray) -> Color {
            self.calls.fetch_add(1, Ordering::Relaxed);
            if ray.direction().x > 0.0 {
                Color::X
            } else {
                Color::Y
            }
        }
    }

    fn pinhole(width: f32, height: f32) -> Camera {
        Camera::new(CameraConfig {
            width,
            height,
            jitter: false,
            ..Default::default()
        })
        .unwrap()
    }

    fn sphere_scene() -> Scene {
        let mut scene = Scene::new("spheres")
            .with_background(Color::new(0.1, 0.1, 0.2))
            .with_ambient_light(AmbientLight::new(Color::ONE, 0.1));
        scene.add_geometry(
            Geometry::new(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0).unwrap())
                .with_emission(Color::new(0.2, 0.0, 0.0))
                .with_material(Material::phong(0.5, 0.5, 30).with_kr(0.3)),
        );
        scene.add_geometry(
            Geometry::new(Sphere::new(Vec3::new(1.5, 0.5, -4.0), 0.7).unwrap())
                .with_material(Material::phong(0.4, 0.2, 10).with_kt(0.5)),
        );
        scene.add_light(PointLight::new(Color::ONE, Vec3::new(2.0, 3.0, 0.0)).with_kl(0.05));
        scene
    }

    #[test]
    fn test_missing_configuration() {
        let buffer = ImageBuffer::new(2, 2);
        let camera = pinhole(1.0, 1.0);

        let err = Renderer::new(RenderSettings::default()).render_image().unwrap_err();
        assert!(matches!(err, RenderError::MissingConfiguration("image sink")));

        let err = Renderer::new(RenderSettings::default())
            .with_sink(&buffer)
            .render_image()
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingConfiguration("camera")));

        let err = Renderer::new(RenderSettings::default())
            .with_sink(&buffer)
            .with_camera(&camera)
            .render_image()
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingConfiguration("ray tracer")));
    }

    #[test]
    fn test_grid_and_write_need_a_sink() {
        let renderer = Renderer::new(RenderSettings::default());
        assert!(matches!(
            renderer.print_grid(2, Color::ONE),
            Err(RenderError::MissingConfiguration("image sink"))
        ));
        assert!(matches!(
            renderer.write_to_image(),
            Err(RenderError::MissingConfiguration("image sink"))
        ));
    }

    #[test]
    fn test_rejects_zero_samples() {
        let buffer = ImageBuffer::new(2, 2);
        let camera = pinhole(1.0, 1.0);
        let tracer = ConstantTracer::new(Color::ONE);
        let settings = RenderSettings {
            sampling: Sampling::SuperSampling { samples: 0 },
            ..Default::default()
        };

        let err = Renderer::new(settings)
            .with_sink(&buffer)
            .with_camera(&camera)
            .with_tracer(&tracer)
            .render_image()
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidConfiguration(_)));
        assert_eq!(tracer.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_print_grid() {
        let buffer = ImageBuffer::new(5, 5);
        Renderer::new(RenderSettings::default())
            .with_sink(&buffer)
            .print_grid(2, Color::ONE)
            .unwrap();

        assert_eq!(buffer.get(0, 3), Color::ONE);
        assert_eq!(buffer.get(2, 1), Color::ONE);
        assert_eq!(buffer.get(3, 4), Color::ONE);
        assert_eq!(buffer.get(1, 1), Color::ZERO);
        assert_eq!(buffer.get(3, 3), Color::ZERO);
    }

    #[test]
    fn test_plain_render_3x3_sphere() {
        let mut scene = Scene::new("single").with_background(Color::new(0.0, 0.0, 0.5));
        scene.add_geometry(
            Geometry::new(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0).unwrap())
                .with_emission(Color::new(1.0, 0.0, 0.0)),
        );
        let tracer = BasicRayTracer::new(&scene);
        let camera = pinhole(3.0, 3.0);
        let buffer = ImageBuffer::new(3, 3);

        Renderer::new(RenderSettings::default())
            .with_camera(&camera)
            .with_tracer(&tracer)
            .with_sink(&buffer)
            .render_image()
            .unwrap();

        assert_eq!(buffer.get(1, 1), Color::new(1.0, 0.0, 0.0));
        assert_eq!(buffer.get(0, 0), Color::new(0.0, 0.0, 0.5));
        assert_eq!(buffer.get(2, 2), Color::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn test_super_sampling_ray_count() {
        let camera = pinhole(1.0, 1.0);
        let tracer = ConstantTracer::new(Color::new(0.25, 0.5, 1.0));
        let buffer = ImageBuffer::new(3, 2);
        let settings = RenderSettings {
            sampling: Sampling::super_sampling(),
            ..Default::default()
        };

        Renderer::new(settings)
            .with_camera(&camera)
            .with_tracer(&tracer)
            .with_sink(&buffer)
            .render_image()
            .unwrap();

        assert_eq!(tracer.calls.load(Ordering::Relaxed), 6 * DEFAULT_SUPER_SAMPLES as usize);
        for color in buffer.pixels() {
            assert!((color - Color::new(0.25, 0.5, 1.0)).length() < 1e-6);
        }
    }

    #[test]
    fn test_adaptive_uniform_region_is_exact() {
        let camera = pinhole(1.0, 1.0);
        let color = Color::new(0.3, 0.6, 0.9);
        let tracer = ConstantTracer::new(color);
        let buffer = ImageBuffer::new(4, 4);
        let settings = RenderSettings {
            sampling: Sampling::adaptive_grid(),
            ..Default::default()
        };

        Renderer::new(settings)
            .with_camera(&camera)
            .with_tracer(&tracer)
            .with_sink(&buffer)
            .render_image()
            .unwrap();

        // Four corners per pixel, no subdivision
        assert_eq!(tracer.calls.load(Ordering::Relaxed), 16 * 4);
        assert!(buffer.pixels().iter().all(|&c| c == color));
    }

    #[test]
    fn test_adaptive_reuses_shared_corners() {
        let camera = pinhole(1.0, 1.0);
        let tracer = SplitTracer {
            calls: AtomicUsize::new(0),
        };
        let mut rng = StdRng::seed_from_u64(0);

        let (color, corners) = adaptive_cell(
            &camera,
            &tracer,
            camera.pixel_center(1, 1, 0, 0),
            camera.pixel_size(1, 1),
            STARTING_DEPTH,
            2,
            [None; 4],
            &mut rng,
        );

        // 3x3 lattice, every point traced once
        assert_eq!(tracer.calls.load(Ordering::Relaxed), 9);
        assert_eq!(corners, [Color::X, Color::Y, Color::Y, Color::X]);
        // Right quadrants straddle the split, left quadrants are uniform
        assert!((color - Color::new(0.25, 0.75, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_adaptive_known_corners_are_not_traced() {
        let camera = pinhole(1.0, 1.0);
        let tracer = ConstantTracer::new(Color::ONE);
        let mut rng = StdRng::seed_from_u64(0);

        let (color, _) = adaptive_cell(
            &camera,
            &tracer,
            camera.pixel_center(1, 1, 0, 0),
            camera.pixel_size(1, 1),
            STARTING_DEPTH,
            DEFAULT_ADAPTIVE_DEPTH,
            [Some(Color::ONE), None, Some(Color::ONE), Some(Color::ONE)],
            &mut rng,
        );

        assert_eq!(tracer.calls.load(Ordering::Relaxed), 1);
        assert_eq!(color, Color::ONE);
    }

    #[test]
    fn test_threaded_render_matches_single_threaded() {
        let scene = sphere_scene();
        let tracer = BasicRayTracer::new(&scene);
        let camera = Camera::new(CameraConfig {
            width: 2.0,
            height: 1.5,
            ..Default::default()
        })
        .unwrap();

        let render = |threads: usize, progress: bool| {
            let buffer = ImageBuffer::new(16, 12);
            let settings = RenderSettings {
                threads,
                sampling: Sampling::SuperSampling { samples: 4 },
                progress,
                seed: 7,
            };
            Renderer::new(settings)
                .with_camera(&camera)
                .with_tracer(&tracer)
                .with_sink(&buffer)
                .render_image()
                .unwrap();
            buffer.pixels()
        };

        let single = render(0, false);
        assert_eq!(render(3, false), single);
        assert_eq!(render(4, true), single);
    }

    #[test]
    fn test_adaptive_threaded_matches_single_threaded() {
        let scene = sphere_scene();
        let tracer = BasicRayTracer::new(&scene);
        let camera = pinhole(2.0, 2.0);

        let render = |threads: usize| {
            let buffer = ImageBuffer::new(8, 8);
            let settings = RenderSettings {
                threads,
                sampling: Sampling::AdaptiveGrid { max_depth: 3 },
                ..Default::default()
            };
            Renderer::new(settings)
                .with_camera(&camera)
                .with_tracer(&tracer)
                .with_sink(&buffer)
                .render_image()
                .unwrap();
            buffer.pixels()
        };

        assert_eq!(render(2), render(0));
    }

    #[test]
    fn test_progress_counts_pixels_not_rows() {
        let camera = pinhole(1.0, 1.0);
        let tracer = ConstantTracer::new(Color::ONE);
        let buffer = ImageBuffer::new(20, 4);
        let job = PixelJob {
            camera: &camera,
            tracer: &tracer,
            nx: 20,
            ny: 4,
            sampling: Sampling::Plain,
            seed: 0,
        };

        let cursor = PixelCursor::new(20, 4).with_progress(true);
        let mut reported = Vec::new();
        render_claims(&job, &buffer, &cursor, &mut |percent| reported.push(percent));

        // 80 pixels: every claim crosses at least one whole percent
        assert_eq!(reported.len(), 80);
        assert!(reported.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(reported.last(), Some(&100));
        assert_eq!(cursor.claimed(), cursor.total());
        assert!(buffer.pixels().iter().all(|&c| c == Color::ONE));
    }

    #[test]
    fn test_sampling_from_json() {
        let sampling: Sampling = serde_json::from_str(r#"{ "mode": "super_sampling" }"#).unwrap();
        assert_eq!(sampling, Sampling::SuperSampling { samples: 10 });

        let sampling: Sampling =
            serde_json::from_str(r#"{ "mode": "adaptive_grid", "max_depth": 4 }"#).unwrap();
        assert_eq!(sampling, Sampling::AdaptiveGrid { max_depth: 4 });

        let settings: RenderSettings = serde_json::from_str(r#"{ "threads": 4 }"#).unwrap();
        assert_eq!(settings.threads, 4);
        assert_eq!(settings.sampling, Sampling::Plain);
        assert!(!settings.progress);
    }
}
