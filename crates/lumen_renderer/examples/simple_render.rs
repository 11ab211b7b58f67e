//! Simple ray tracer example.
//!
//! Renders a mirror sphere, a glass sphere and a triangle over a plane and
//! saves the result as PNG.

use lumen_core::{
    AmbientLight, Geometry, Material, Plane, PointLight, Polygon, Scene, Sphere, SpotLight,
};
use lumen_renderer::{
    BasicRayTracer, Camera, CameraConfig, Color, ImageSink, ImageWriter, RenderSettings,
    Renderer, Sampling, Vec3,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Lumen Ray Tracer - Simple Example");
    println!("=================================");

    let start = std::time::Instant::now();
    let scene = build_scene()?;
    println!("Scene built in {:?}", start.elapsed());

    let camera = Camera::new(CameraConfig {
        position: Vec3::new(0.0, 1.0, 4.0),
        forward: Vec3::NEG_Z,
        up: Vec3::Y,
        width: 3.2,
        height: 1.8,
        distance: 2.0,
        ..Default::default()
    })?;

    let settings = RenderSettings {
        threads: std::thread::available_parallelism().map_or(4, |n| n.get()),
        sampling: Sampling::super_sampling(),
        progress: true,
        seed: 1,
    };

    let tracer = BasicRayTracer::new(&scene);
    let writer = ImageWriter::new("output.png", 800, 450);
    let renderer = Renderer::new(settings)
        .with_camera(&camera)
        .with_tracer(&tracer)
        .with_sink(&writer);

    println!(
        "Rendering {}x{} with {:?}...",
        writer.width(),
        writer.height(),
        settings.sampling
    );

    let start = std::time::Instant::now();
    renderer.render_image()?;
    println!("Rendered in {:?}", start.elapsed());

    renderer.write_to_image()?;
    println!("Saved to {}", writer.path().display());

    Ok(())
}

fn build_scene() -> Result<Scene, Box<dyn std::error::Error>> {
    let mut scene = Scene::new("simple")
        .with_background(Color::new(0.05, 0.05, 0.1))
        .with_ambient_light(AmbientLight::new(Color::ONE, 0.1));

    // Ground
    scene.add_geometry(
        Geometry::new(Plane::new(Vec3::ZERO, Vec3::Y)?)
            .with_emission(Color::new(0.1, 0.1, 0.1))
            .with_material(Material::phong(0.6, 0.2, 20).with_kr(0.2)),
    );

    // Mirror sphere
    scene.add_geometry(
        Geometry::new(Sphere::new(Vec3::new(-1.2, 1.0, -1.0), 1.0)?)
            .with_emission(Color::new(0.1, 0.1, 0.3))
            .with_material(Material::phong(0.3, 0.6, 60).with_kr(0.5)),
    );

    // Glass sphere
    scene.add_geometry(
        Geometry::new(Sphere::new(Vec3::new(1.2, 0.7, 0.0), 0.7)?)
            .with_emission(Color::new(0.3, 0.05, 0.05))
            .with_material(Material::phong(0.2, 0.8, 100).with_kt(0.6)),
    );

    // Backdrop triangle
    scene.add_geometry(
        Geometry::new(Polygon::triangle(
            Vec3::new(-3.0, 0.0, -4.0),
            Vec3::new(3.0, 0.0, -4.0),
            Vec3::new(0.0, 3.5, -4.0),
        )?)
        .with_emission(Color::new(0.05, 0.2, 0.05))
        .with_material(Material::phong(0.5, 0.3, 30)),
    );

    scene.add_light(
        PointLight::new(Color::new(1.0, 0.9, 0.8), Vec3::new(3.0, 5.0, 3.0))
            .with_kl(0.02)
            .with_kq(0.005),
    );
    scene.add_light(
        SpotLight::new(Color::new(0.6, 0.6, 1.0), Vec3::new(-3.0, 4.0, 2.0), Vec3::new(1.0, -1.5, -1.0))?
            .with_kl(0.01),
    );

    println!("Created {} objects", scene.geometry_count());
    Ok(scene)
}
