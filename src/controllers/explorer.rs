use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::core::actions::plot_fractal::plot_fractal::plot_fractal;
use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::vec2::Vec2;
use crate::core::fractal::base::Base;
use crate::core::fractal::fractal::Fractal;
use crate::core::fractal::point::Point;
use crate::storage::write_ppm::write_ppm;

/// One file-output run: motif, budget, frame and destination.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub points: Vec<Point>,
    pub max_oom: u32,
    pub width: i32,
    pub height: i32,
    pub zoom_steps: i32,
    /// Deepest depth to render, `None` for everything the budget allows.
    pub render_depth: Option<usize>,
    pub output_path: PathBuf,
}

impl Default for ExplorerConfig {
    /// The classic sweeping curve with a slow hue drift along the motif.
    fn default() -> Self {
        Self {
            points: vec![
                Point {
                    pos: Vec2 { x: 0.05, y: 0.25 },
                    colour: 0,
                    ..Point::default()
                },
                Point {
                    pos: Vec2 { x: 0.95, y: -0.25 },
                    colour: 128,
                    ..Point::default()
                },
                Point {
                    pos: Vec2 { x: 1.0, y: 0.0 },
                    colour: 256,
                    ..Point::default()
                },
            ],
            max_oom: 18,
            width: 1024,
            height: 768,
            zoom_steps: 0,
            render_depth: None,
            output_path: PathBuf::from("output/curve.ppm"),
        }
    }
}

pub fn explorer_controller(config: &ExplorerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let base = Base::new(config.points.clone())?;
    let mut fractal = Fractal::new(base, config.max_oom)?;

    println!("Rendering fractal curve...");
    println!("Image size: {}x{}", config.width, config.height);
    println!("Point budget: 2^{}", config.max_oom);

    let deepest = fractal.max_depth() - 1;
    let target = config.render_depth.unwrap_or(deepest).min(deepest);

    let start = Instant::now();
    while fractal.depth() < target && fractal.render_next_parallel() {}
    let duration = start.elapsed();

    println!("Depth:      {} of {}", fractal.depth(), deepest);
    println!("Points:     {}", fractal.total_points());
    println!("Duration:   {:?}", duration);

    let pixel_rect = PixelRect::new(
        PixelPoint { x: 0, y: 0 },
        PixelPoint {
            x: config.width,
            y: config.height,
        },
    )?;
    let pixel_buffer = plot_fractal(&fractal, pixel_rect, config.zoom_steps);

    if let Some(parent) = config.output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_ppm(pixel_buffer, &config.output_path)?;
    println!("Saved to {}", config.output_path.display());
    Ok(())
}
