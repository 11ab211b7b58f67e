use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use lumen_core::Color;
use lumen_renderer::{BasicRayTracer, Camera, ImageWriter, Renderer};

mod cli;
mod config;
mod logger;

use cli::Args;
use config::RenderFile;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let mut file = RenderFile::load(&args.file)?;
    args.apply(&mut file);

    let name = args
        .file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");
    let scene = file
        .scene
        .into_scene(name)
        .with_context(|| format!("Invalid scene in {}", args.file.display()))?;
    let camera = Camera::new(file.camera).context("Invalid camera")?;
    let tracer = BasicRayTracer::new(&scene).with_limits(file.limits);
    let writer = ImageWriter::new(&args.output, file.image.width, file.image.height);

    let renderer = Renderer::new(file.settings)
        .with_camera(&camera)
        .with_tracer(&tracer)
        .with_sink(&writer);

    renderer.render_image().context("Render failed")?;

    if let Some(interval) = args.grid {
        renderer.print_grid(interval, Color::ONE)?;
    }

    renderer
        .write_to_image()
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    info!("Done: {}", args.output.display());
    Ok(())
}
