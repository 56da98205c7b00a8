//! Point sources for the example binaries.
use anyhow::{bail, Context};
use rand::Rng;

/// Parse whitespace-separated unsigned `x y` pairs.
pub fn parse_points(input: &str) -> anyhow::Result<Vec<(u32, u32)>> {
    let mut tokens = input.split_whitespace();
    let mut points = Vec::new();
    while let Some(x) = tokens.next() {
        let Some(y) = tokens.next() else {
            bail!("coordinate '{x}' has no matching y value");
        };
        let x = x
            .parse::<u32>()
            .with_context(|| format!("invalid x coordinate '{x}'"))?;
        let y = y
            .parse::<u32>()
            .with_context(|| format!("invalid y coordinate '{y}'"))?;
        points.push((x, y));
    }
    Ok(points)
}

/// Points from a normal distribution centered on the map, `sigma` given per axis as a
/// fraction of the map size. Samples falling off the map are dropped.
pub fn gaussian_cloud<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    width: u32,
    height: u32,
    sigma: (f32, f32),
) -> Vec<(u32, u32)> {
    let (cx, cy) = (0.5 * width as f32, 0.5 * height as f32);
    let (sx, sy) = (sigma.0 * width as f32, sigma.1 * height as f32);

    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        // Box-Muller
        let u1: f32 = rng.random::<f32>().max(f32::MIN_POSITIVE);
        let u2: f32 = rng.random();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = std::f32::consts::TAU * u2;
        let x = cx + sx * r * theta.cos();
        let y = cy + sy * r * theta.sin();
        if x >= 0.0 && y >= 0.0 && x < width as f32 && y < height as f32 {
            out.push((x as u32, y as u32));
        }
    }
    out
}
