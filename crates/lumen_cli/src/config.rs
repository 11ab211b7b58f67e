//! Render files: a scene plus everything needed to render it.
//!
//! ```json
//! {
//!   "image": { "width": 400, "height": 300 },
//!   "camera": { "position": [0, 0, 0], "forward": [0, 0, -1], "up": [0, 1, 0],
//!               "width": 4, "height": 3, "distance": 2 },
//!   "settings": { "threads": 4, "sampling": { "mode": "adaptive_grid" } },
//!   "scene": { "geometries": [], "lights": [] }
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use lumen_core::SceneDescription;
use lumen_renderer::{CameraConfig, RenderSettings, TraceLimits};
use serde::Deserialize;

/// Output resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Contents of a render file. Every section is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderFile {
    pub image: ImageSize,
    pub camera: CameraConfig,
    pub settings: RenderSettings,
    pub limits: TraceLimits,
    pub scene: SceneDescription,
}

impl RenderFile {
    /// Read and parse a render file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read render file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse render file {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
