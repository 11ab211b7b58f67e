//! Image sinks the renderer writes pixels into.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use image::{ImageResult, Rgb, RgbImage};
use lumen_core::Color;

/// Destination for rendered pixels.
///
/// `write_pixel` is called concurrently from render threads, each for a
/// distinct coordinate.
pub trait ImageSink: Send + Sync {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Store the color of pixel (`col`, `row`). Row 0 is the top.
    fn write_pixel(&self, col: u32, row: u32, color: Color);

    /// Write the finished image out. Called once after rendering.
    fn persist(&self) -> ImageResult<()>;
}

/// In-memory image storing linear colors.
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Mutex<Vec<Color>>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: Mutex::new(vec![Color::ZERO; width as usize * height as usize]),
        }
    }

    /// Get the pixel at (`col`, `row`).
    pub fn get(&self, col: u32, row: u32) -> Color {
        self.lock()[pixel_index(self.width, col, row)]
    }

    /// Copy of every pixel in row-major order.
    pub fn pixels(&self) -> Vec<Color> {
        self.lock().clone()
    }

    /// Convert to an 8-bit RGB image.
    pub fn to_rgb_image(&self) -> RgbImage {
        let pixels = self.lock();
        RgbImage::from_fn(self.width, self.height, |x, y| {
            Rgb(color_to_rgb(pixels[pixel_index(self.width, x, y)]))
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Color>> {
        // A panicking writer leaves every other pixel intact
        self.pixels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ImageSink for ImageBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn write_pixel(&self, col: u32, row: u32, color: Color) {
        if col < self.width && row < self.height {
            self.lock()[pixel_index(self.width, col, row)] = color;
        }
    }

    fn persist(&self) -> ImageResult<()> {
        Ok(())
    }
}

/// Image buffer saved to a file on [`ImageSink::persist`].
///
/// The format follows the file extension (PNG for `.png`).
pub struct ImageWriter {
    path: PathBuf,
    buffer: ImageBuffer,
}

impl ImageWriter {
    pub fn new(path: impl AsRef<Path>, width: u32, height: u32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            buffer: ImageBuffer::new(width, height),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn buffer(&self) -> &ImageBuffer {
        &self.buffer
    }
}

impl ImageSink for ImageWriter {
    fn width(&self) -> u32 {
        self.buffer.width
    }

    fn height(&self) -> u32 {
        self.buffer.height
    }

    fn write_pixel(&self, col: u32, row: u32, color: Color) {
        self.buffer.write_pixel(col, row, color);
    }

    fn persist(&self) -> ImageResult<()> {
        self.buffer.to_rgb_image().save(&self.path)?;
        log::info!("Saved {}x{} image to {}", self.buffer.width, self.buffer.height, self.path.display());
        Ok(())
    }
}

/// Convert a linear color to 8-bit RGB, clamping each channel to [0, 1].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = color.clamp(Color::ZERO, Color::ONE) * 255.0;
    [c.x.round() as u8, c.y.round() as u8, c.z.round() as u8]
}

/// Row-major offset of a pixel, computed in `usize` so large images don't
/// overflow.
fn pixel_index(width: u32, col: u32, row: u32) -> usize {
    row as usize * width as usize + col as usize
}
