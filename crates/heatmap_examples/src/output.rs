//! Shared plumbing for the example binaries: logging setup and PNG encoding.
use std::io::Write;
use std::path::Path;

use anyhow::{ensure, Context};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber on stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Encode a packed RGBA8 raster as PNG at `path`.
pub fn save_png(path: impl AsRef<Path>, rgba: &[u8], width: u32, height: u32) -> anyhow::Result<()> {
    let path = path.as_ref();
    check_len(rgba, width, height)?;
    image::save_buffer(path, rgba, width, height, ExtendedColorType::Rgba8)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {} ({}x{})", path.display(), width, height);
    Ok(())
}

/// Encode a packed RGBA8 raster as PNG into `writer`.
pub fn write_png<W: Write>(writer: W, rgba: &[u8], width: u32, height: u32) -> anyhow::Result<()> {
    check_len(rgba, width, height)?;
    PngEncoder::new(writer)
        .write_image(rgba, width, height, ExtendedColorType::Rgba8)
        .context("failed to encode PNG")?;
    Ok(())
}

fn check_len(rgba: &[u8], width: u32, height: u32) -> anyhow::Result<()> {
    let expected = (width as usize) * (height as usize) * 4;
    ensure!(
        rgba.len() == expected,
        "raster holds {} bytes, {}x{} RGBA needs {}",
        rgba.len(),
        width,
        height,
        expected
    );
    Ok(())
}
