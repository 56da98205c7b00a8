use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use heatmap::prelude::*;
use heatmap::stamp::MAX_RADIUS;
use heatmap_examples::{gaussian_cloud, init_tracing, save_png};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Render one point cloud through every `_mixed` palette.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Heatmap width in pixels.
    width: u32,

    /// Heatmap height in pixels.
    height: u32,

    /// Stamp radius; defaults to a twentieth of the smaller dimension.
    #[arg(value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_RADIUS)))]
    radius: Option<u32>,

    /// Directory the images are written to.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Seed for the point cloud.
    #[arg(long, default_value_t = 7)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let radius = args
        .radius
        .unwrap_or((args.width.min(args.height) / 20).min(MAX_RADIUS));

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let points = gaussian_cloud(&mut rng, 1000, args.width, args.height, (0.5 / 3.0, 0.25));

    let mut field = DensityField::new(args.width, args.height);
    field.add_points_with_stamp(points, &Stamp::linear(radius));

    let palettes = heatmap_palettes::registry()?;
    let mut image = vec![0u8; heatmap::render::buffer_len(&field)];
    for name in palettes.names() {
        if !name.ends_with("_mixed") {
            continue;
        }
        let scheme = palettes.require(name)?;
        render_into(&field, scheme, &mut image)?;
        save_png(
            args.out_dir.join(format!("{name}.png")),
            &image,
            args.width,
            args.height,
        )?;
    }
    Ok(())
}
