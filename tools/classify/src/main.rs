/// Terrain classification shell: parses three sensor readings, trains the
/// engine on the fixed synthetic set, and prints the predicted class,
/// confidence, and navigability verdict.

use anyhow::{Context, Result};
use clap::Parser;
use terrain_core::{GenParams, TerrainEngine};

#[derive(Parser, Debug)]
#[command(name = "classify", about = "Classify a terrain reading with the synthetic-data SVM")]
struct Args {
    /// Vibration reading in Hz.
    #[arg(short, long)]
    vibration: f64,

    /// Slope reading in percent.
    #[arg(short, long)]
    slope: f64,

    /// Humidity reading in percent.
    #[arg(short = 'u', long)]
    humidity: f64,

    /// Emit the prediction as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Seed for the synthetic training set.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let engine = TerrainEngine::train(&GenParams {
        seed: args.seed,
        ..GenParams::default()
    })
    .context("model training failed")?;

    match engine.classify(args.vibration, args.slope, args.humidity) {
        Ok(pred) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&pred)?);
            } else {
                println!("Terrain: {}", pred.label);
                println!("Confidence: {:.1}%", pred.confidence_pct);
                if pred.navigable {
                    println!("Suitable for autonomous navigation");
                } else {
                    println!("Not recommended for autonomous navigation");
                }
            }
            Ok(())
        }
        Err(_) => {
            // Generic failure notification; the reading never crashes the shell.
            eprintln!("Could not classify the reading");
            std::process::exit(1);
        }
    }
}
