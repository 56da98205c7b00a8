use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use heatmap::prelude::*;
use heatmap::stamp::MAX_RADIUS;
use heatmap_examples::{init_tracing, parse_points, save_png, write_png};
use tracing::{info, warn};

/// Render a heatmap from `x y` pairs read on stdin.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Heatmap width in pixels.
    width: u32,

    /// Heatmap height in pixels.
    height: u32,

    /// Stamp radius; defaults to a tenth of the smaller dimension.
    #[arg(value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_RADIUS)))]
    radius: Option<u32>,

    /// Palette name, see `--list-palettes`.
    #[arg(short, long, default_value = heatmap_palettes::DEFAULT_SCHEME)]
    palette: String,

    /// Absolute density mapped to the top color instead of the maximum.
    #[arg(short, long)]
    saturation: Option<f32>,

    /// Write the PNG here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the available palette names and exit.
    #[arg(long)]
    list_palettes: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let palettes = heatmap_palettes::registry()?;

    if args.list_palettes {
        let mut stdout = std::io::stdout().lock();
        for name in palettes.names() {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let scheme = palettes.require(&args.palette)?;
    let radius = args
        .radius
        .unwrap_or((args.width.min(args.height) / 10).min(MAX_RADIUS));
    let stamp = Stamp::linear(radius);

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read points from stdin")?;
    let points = parse_points(&input)?;

    let mut field = DensityField::new(args.width, args.height);
    for (x, y) in points {
        if field.contains(x, y) {
            field.add_point_with_stamp(x, y, &stamp);
        } else {
            warn!("skipping out-of-bound input coordinate: ({x},{y})");
        }
    }
    info!(radius, max = field.max(), "accumulated points");

    let mut renderer = Renderer::new(scheme);
    if let Some(level) = args.saturation {
        renderer = renderer.with_saturation(level);
    }
    let image = renderer.render(&field);

    match args.output {
        Some(path) => save_png(path, &image, args.width, args.height),
        None => write_png(std::io::stdout().lock(), &image, args.width, args.height),
    }
}
