use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::{Sampling, DEFAULT_ADAPTIVE_DEPTH, DEFAULT_SUPER_SAMPLES};

use crate::config::RenderFile;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Sampling modes selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SamplingMode {
    /// One ray through each pixel center
    Plain,
    /// Average of several jittered rays per pixel
    Super,
    /// Subdivide pixels only where corner colors differ
    Adaptive,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "A recursive ray tracer")]
pub struct Args {
    /// Render file (JSON with scene, camera and settings)
    pub file: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Render threads (0 renders on the main thread)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Sampling mode
    #[arg(long, value_enum)]
    pub sampling: Option<SamplingMode>,

    /// Rays per pixel for super-sampling
    #[arg(short, long)]
    pub samples: Option<u32>,

    /// Maximum adaptive subdivision depth
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for the per-pixel random streams
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log render progress
    #[arg(short, long)]
    pub progress: bool,

    /// Paint grid lines every N pixels over the render
    #[arg(long, value_name = "N")]
    pub grid: Option<u32>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command line overrides on top of a render file.
    pub fn apply(&self, file: &mut RenderFile) {
        if let Some(width) = self.width {
            file.image.width = width;
        }
        if let Some(height) = self.height {
            file.image.height = height;
        }
        if let Some(threads) = self.threads {
            file.settings.threads = threads;
        }
        if let Some(seed) = self.seed {
            file.settings.seed = seed;
        }
        if self.progress {
            file.settings.progress = true;
        }
        file.settings.sampling = self.sampling(file.settings.sampling);
    }

    fn sampling(&self, current: Sampling) -> Sampling {
        let mode = self.sampling.unwrap_or(match current {
            Sampling::Plain => SamplingMode::Plain,
            Sampling::SuperSampling { .. } => SamplingMode::Super,
            Sampling::AdaptiveGrid { .. } => SamplingMode::Adaptive,
        });

        match (mode, current) {
            (SamplingMode::Plain, _) => Sampling::Plain,
            (SamplingMode::Super, Sampling::SuperSampling { samples }) => Sampling::SuperSampling {
                samples: self.samples.unwrap_or(samples),
            },
            (SamplingMode::Super, _) => Sampling::SuperSampling {
                samples: self.samples.unwrap_or(DEFAULT_SUPER_SAMPLES),
            },
            (SamplingMode::Adaptive, Sampling::AdaptiveGrid { max_depth }) => Sampling::AdaptiveGrid {
                max_depth: self.max_depth.unwrap_or(max_depth),
            },
            (SamplingMode::Adaptive, _) => Sampling::AdaptiveGrid {
                max_depth: self.max_depth.unwrap_or(DEFAULT_ADAPTIVE_DEPTH),
            },
        }
    }
}
