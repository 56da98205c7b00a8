//! Stamp set rendered by `stamps-showcase`.
use heatmap::error::Result;
use heatmap::stamp::Stamp;

/// Named stamps of radius `r`, from fattest falloff to pointiest, plus a loaded diamond.
pub fn showcase_stamps(r: u32) -> Result<Vec<(&'static str, Stamp)>> {
    Ok(vec![
        ("linear", Stamp::linear(r)),
        ("fat", Stamp::nonlinear(r, |t| t * t)),
        ("fatter", Stamp::nonlinear(r, |t| t.powi(4))),
        ("fattest", Stamp::nonlinear(r, |t| t.powi(6))),
        ("pointy", Stamp::nonlinear(r, f32::sqrt)),
        ("pointier", Stamp::nonlinear(r, |t| t.sqrt().sqrt().sqrt())),
        ("diamond", diamond(r)?),
    ])
}

/// Manhattan-distance falloff, loaded as raw data.
fn diamond(r: u32) -> Result<Stamp> {
    let d = 2 * r + 1;
    let r = r as i64;
    let mut data = Vec::with_capacity((d as usize) * (d as usize));
    for y in 0..d as i64 {
        for x in 0..d as i64 {
            let manhattan = ((x - r).abs() + (y - r).abs()) as f32;
            data.push(1.0 - (manhattan / (r + 1) as f32).min(1.0));
        }
    }
    Stamp::load(d, d, data)
}
