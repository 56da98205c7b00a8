use heatmap::prelude::*;
use heatmap_examples::{init_tracing, save_png};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let (w, h) = (256, 512);
    let npoints = 1000;

    let mut field = DensityField::new(w, h);
    let mut rng = StdRng::seed_from_u64(123);
    for _ in 0..npoints {
        field.add_point(rng.random_range(0..w), rng.random_range(0..h));
    }

    let scheme = heatmap_palettes::default_scheme()?;
    save_png("heatmap.png", &render(&field, &scheme), w, h)?;
    Ok(())
}
