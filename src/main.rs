use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};

use coinseg::export::{self, Summary};
use coinseg::models::{DEFAULT_MIN_HOLE_SIZE, DEFAULT_MIN_OBJECT_SIZE, PARAM_MAX, PARAM_MIN};
use coinseg::{sample_image, SegmentationPipeline};

#[derive(Parser)]
#[command(name = "coinseg")]
#[command(about = "Segment the sample coins image and measure every region")]
struct Cli {
    /// Remove foreground objects smaller than this many pixels (0 disables)
    #[arg(long, default_value_t = DEFAULT_MIN_OBJECT_SIZE,
          value_parser = clap::value_parser!(u32).range((PARAM_MIN as i64)..=(PARAM_MAX as i64)))]
    min_object_size: u32,

    /// Fill enclosed holes smaller than this many pixels (0 disables)
    #[arg(long, default_value_t = DEFAULT_MIN_HOLE_SIZE,
          value_parser = clap::value_parser!(u32).range((PARAM_MIN as i64)..=(PARAM_MAX as i64)))]
    min_hole_size: u32,

    /// Write the full-precision region table to this CSV file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Save the intermediate images to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Print a JSON summary instead of the text table
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Open the interactive window
    #[cfg(feature = "gui")]
    #[arg(long)]
    gui: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    #[cfg(feature = "gui")]
    {
        if args.gui {
            return coinseg::gui::run().map_err(|e| anyhow::anyhow!("GUI failed: {}", e));
        }
    }

    // Check the output directory before doing any work
    if let Some(dir) = &args.out {
        export::prepare_output_dir(dir)?;
    }

    let img = sample_image();
    info!("Sample image loaded: {}x{}", img.width(), img.height());

    let start = Instant::now();
    let result = SegmentationPipeline::new()
        .with_min_object_size(args.min_object_size)
        .with_min_hole_size(args.min_hole_size)
        .run(&img)?;
    let elapsed = start.elapsed().as_secs_f64();

    let summary = Summary::new(&result, elapsed);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("\n=== Coin Segmentation Results ===");
        for (name, value) in summary.metrics() {
            println!("{}: {}", name, value);
        }

        if result.regions.is_empty() {
            println!("\nNo regions detected.");
        } else {
            println!("\nRegion features:");
            print!("{}", export::format_table(&result.regions));
        }
    }

    if let Some(path) = &args.csv {
        export::save_csv(&result.regions, path)?;
        info!("Wrote {} regions to {}", result.regions.len(), path.display());
    }

    if let Some(dir) = &args.out {
        export::save_images(&result, &img, dir)?;
    }

    Ok(())
}
