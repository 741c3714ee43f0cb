//! Diagnostic scatter-plot renderer — classifies one reading and writes the
//! training set (vibration vs. slope) as a PNG, colour-coded per class, with
//! the query point overlaid as an X marker.
//! Visualization convenience only; not part of the model contract.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use terrain_core::{GenParams, TerrainClass, TerrainEngine};

const W: u32 = 640;
const H: u32 = 480;
const MARGIN: u32 = 40;

// Data window: covers every class range with slack on each side.
const VIB_MIN: f64 = 1.0;
const VIB_MAX: f64 = 10.0;
const SLOPE_MIN: f64 = 1.0;
const SLOPE_MAX: f64 = 22.0;

#[derive(Parser, Debug)]
#[command(name = "visualize", about = "Render the terrain training set scatter plot")]
struct Args {
    /// Vibration reading in Hz for the query marker.
    #[arg(short, long, default_value_t = 5.0)]
    vibration: f64,

    /// Slope reading in percent for the query marker.
    #[arg(short, long, default_value_t = 7.0)]
    slope: f64,

    /// Humidity reading in percent (used for classification only).
    #[arg(short = 'u', long, default_value_t = 30.0)]
    humidity: f64,

    /// Output PNG path.
    #[arg(short, long, default_value = "data/debug/terrain_scatter.png")]
    output: PathBuf,

    /// Seed for the synthetic training set.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

// ── Colour helpers ────────────────────────────────────────────────────────────

fn class_color(class: TerrainClass) -> [u8; 3] {
    match class {
        TerrainClass::Flat => [46, 204, 113],   // green
        TerrainClass::Muddy => [231, 76, 60],   // red
        TerrainClass::Rocky => [127, 140, 141], // grey
        TerrainClass::Sandy => [241, 196, 15],  // yellow
    }
}

// ── Pixel helpers ─────────────────────────────────────────────────────────────

/// Map a (vibration, slope) pair into plot pixel coordinates. Values outside
/// the data window are clamped to its edge. Slope increases upward.
fn to_px(vibration: f64, slope: f64) -> (i64, i64) {
    let tx = ((vibration - VIB_MIN) / (VIB_MAX - VIB_MIN)).clamp(0.0, 1.0);
    let ty = ((slope - SLOPE_MIN) / (SLOPE_MAX - SLOPE_MIN)).clamp(0.0, 1.0);
    let span_x = (W - 2 * MARGIN) as f64;
    let span_y = (H - 2 * MARGIN) as f64;
    let x = MARGIN as f64 + tx * span_x;
    let y = (H - MARGIN) as f64 - ty * span_y;
    (x as i64, y as i64)
}

fn put(img: &mut image::RgbImage, x: i64, y: i64, color: [u8; 3]) {
    if x >= 0 && x < W as i64 && y >= 0 && y < H as i64 {
        img.put_pixel(x as u32, y as u32, image::Rgb(color));
    }
}

/// Filled disc of the given radius.
fn draw_disc(img: &mut image::RgbImage, cx: i64, cy: i64, radius: i64, color: [u8; 3]) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

/// X marker: two thick diagonal strokes, white outline under a black core.
fn draw_x(img: &mut image::RgbImage, cx: i64, cy: i64, arm: i64) {
    for d in -arm..=arm {
        for t in -2i64..=2 {
            put(img, cx + d + t, cy + d, [255, 255, 255]);
            put(img, cx + d + t, cy - d, [255, 255, 255]);
        }
    }
    for d in -arm..=arm {
        for t in -1i64..=1 {
            put(img, cx + d + t, cy + d, [0, 0, 0]);
            put(img, cx + d + t, cy - d, [0, 0, 0]);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let engine = TerrainEngine::train(&GenParams {
        seed: args.seed,
        ..GenParams::default()
    })
    .context("model training failed")?;

    match engine.classify(args.vibration, args.slope, args.humidity) {
        Ok(pred) => {
            println!("Terrain: {} ({:.1}%)", pred.label, pred.confidence_pct);
        }
        Err(_) => {
            eprintln!("Could not classify the reading; plotting training set only");
        }
    }

    let mut img = image::RgbImage::from_pixel(W, H, image::Rgb([255, 255, 255]));

    // Plot frame.
    for x in MARGIN..=(W - MARGIN) {
        put(&mut img, x as i64, MARGIN as i64, [200, 200, 200]);
        put(&mut img, x as i64, (H - MARGIN) as i64, [200, 200, 200]);
    }
    for y in MARGIN..=(H - MARGIN) {
        put(&mut img, MARGIN as i64, y as i64, [200, 200, 200]);
        put(&mut img, (W - MARGIN) as i64, y as i64, [200, 200, 200]);
    }

    // Training set: vibration on x, slope on y.
    for sample in engine.dataset() {
        let (x, y) = to_px(sample.vibration, sample.slope);
        draw_disc(&mut img, x, y, 3, class_color(sample.class));
    }

    // Query point on top.
    let (qx, qy) = to_px(args.vibration, args.slope);
    draw_x(&mut img, qx, qy, 7);

    if let Some(dir) = args.output.parent().filter(|d| *d != Path::new("")) {
        fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    }
    img.save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
