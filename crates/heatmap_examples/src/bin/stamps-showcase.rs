use clap::Parser;
use heatmap::prelude::*;
use heatmap::stamp::MAX_RADIUS;
use heatmap_examples::{gaussian_cloud, init_tracing, save_png, showcase_stamps};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Render stamps of different falloffs side by side, then one heatmap per stamp.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Stamp radius in pixels.
    #[arg(value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_RADIUS)))]
    radius: u32,

    /// Seed for the shared point cloud.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let r = args.radius;
    let d = 2 * r + 1;

    let stamps = showcase_stamps(r)?;

    // All stamps next to each other on one strip.
    let strip_w = d * stamps.len() as u32;
    let mut strip = DensityField::new(strip_w, d);
    for (i, (_, stamp)) in stamps.iter().enumerate() {
        strip.add_point_with_stamp(i as u32 * d + r, r, stamp);
    }
    let b2w_opaque = heatmap_palettes::b2w()?.opaque();
    save_png("stamps.png", &render(&strip, &b2w_opaque), strip_w, d)?;

    // Each heatmap is normalized on its own.
    let size = d * 20;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let points = gaussian_cloud(&mut rng, 1000, size, size, (0.5 / 3.0, 0.25));
    let scheme = heatmap_palettes::default_scheme()?;
    for (name, stamp) in &stamps {
        let mut field = DensityField::new(size, size);
        field.add_points_with_stamp(points.iter().copied(), stamp);
        save_png(
            format!("stamps_heatmap_{name}.png"),
            &render(&field, &scheme),
            size,
            size,
        )?;
    }
    Ok(())
}
