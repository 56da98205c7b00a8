//! Colorize a [`DensityField`] into a packed RGBA8 raster.
//!
//! Output is row-major, top row first, four bytes per cell: the layout generic image
//! encoders expect. Each cell is normalized as `clamp(value / saturation, 0, 1)` and
//! looked up in a [`ColorScheme`]. By default the saturation level is the field's
//! running maximum; a manual level is an absolute density mapped to the top of the
//! gradient. A saturation level that is not strictly positive maps every cell to `0`.
use tracing::debug;

use crate::color::ColorScheme;
use crate::error::{Error, Result};
use crate::field::DensityField;

/// Bytes per output pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Renders fields through a color scheme, optionally with a fixed saturation level.
#[derive(Clone, Copy, Debug)]
pub struct Renderer<'a> {
    scheme: &'a ColorScheme,
    saturation: Option<f32>,
}

impl<'a> Renderer<'a> {
    /// Renderer that normalizes each field by its own running maximum.
    pub fn new(scheme: &'a ColorScheme) -> Self {
        Self {
            scheme,
            saturation: None,
        }
    }

    /// Map the absolute density `level` (and anything above it) to the top of the gradient.
    pub fn with_saturation(mut self, level: f32) -> Self {
        self.saturation = Some(level);
        self
    }

    pub fn scheme(&self) -> &'a ColorScheme {
        self.scheme
    }

    /// Saturation level that will be used for `field`.
    pub fn saturation_for(&self, field: &DensityField) -> f32 {
        self.saturation.unwrap_or_else(|| field.max())
    }

    /// Render into a newly allocated buffer of `width * height * 4` bytes.
    pub fn render(&self, field: &DensityField) -> Vec<u8> {
        let mut out = vec![0u8; buffer_len(field)];
        self.fill(field, &mut out);
        out
    }

    /// Render into `out`, which must hold exactly `width * height * 4` bytes.
    pub fn render_into(&self, field: &DensityField, out: &mut [u8]) -> Result<()> {
        let expected = buffer_len(field);
        if out.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: out.len(),
            });
        }
        self.fill(field, out);
        Ok(())
    }

    fn fill(&self, field: &DensityField, out: &mut [u8]) {
        let saturation = self.saturation_for(field);
        debug!(
            width = field.width(),
            height = field.height(),
            saturation,
            "rendering density field"
        );

        // Also catches NaN.
        let positive = saturation > 0.0;
        for (px, v) in out
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(field.values().iter())
        {
            let t = if positive {
                (v / saturation).clamp(0.0, 1.0)
            } else {
                0.0
            };
            px.copy_from_slice(&self.scheme.rgba8_at(t).to_array());
        }
    }
}

/// Number of bytes a rendering of `field` occupies.
pub fn buffer_len(field: &DensityField) -> usize {
    (field.width() as usize) * (field.height() as usize) * BYTES_PER_PIXEL
}

/// Render normalized by the field's running maximum.
pub fn render(field: &DensityField, scheme: &ColorScheme) -> Vec<u8> {
    Renderer::new(scheme).render(field)
}

/// [`render`] into a caller-provided buffer.
pub fn render_into(field: &DensityField, scheme: &ColorScheme, out: &mut [u8]) -> Result<()> {
    Renderer::new(scheme).render_into(field, out)
}

/// Render with `saturation` mapped to the top of the gradient.
pub fn render_saturated(field: &DensityField, scheme: &ColorScheme, saturation: f32) -> Vec<u8> {
    Renderer::new(scheme)
        .with_saturation(saturation)
        .render(field)
}

/// [`render_saturated`] into a caller-provided buffer.
pub fn render_saturated_into(
    field: &DensityField,
    scheme: &ColorScheme,
    saturation: f32,
    out: &mut [u8],
) -> Result<()> {
    Renderer::new(scheme)
        .with_saturation(saturation)
        .render_into(field, out)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::color::{ColorStop, Easing, Interpolation, Rgba};
    use crate::stamp::Stamp;

    const T: [u8; 4] = [0, 0, 0, 0];
    const W: [u8; 4] = [255, 255, 255, 255];
    const HALF: [u8; 4] = [127, 127, 127, 255];
    const THREE_QUARTERS: [u8; 4] = [191, 191, 191, 255];

    fn b2w() -> ColorScheme {
        ColorScheme::new(
            [
                ColorStop::new(0.0, Rgba::TRANSPARENT),
                ColorStop::new(1.0, Rgba::rgb(255, 255, 255)),
            ],
            Interpolation::Mixed,
        )
        .unwrap()
        .with_easing(Easing::Linear)
    }

    fn cross() -> Stamp {
        Stamp::load(3, 3, vec![0.0f32, 0.5, 0.0, 0.5, 1.0, 0.5, 0.0, 0.5, 0.0]).unwrap()
    }

    fn pixels(rows: [[[u8; 4]; 3]; 3]) -> Vec<u8> {
        rows.iter().flatten().flatten().copied().collect()
    }

    #[test]
    fn empty_field_renders_bottom_of_gradient() {
        let field = DensityField::new(3, 3);
        let mut img = vec![1u8; 3 * 3 * 4];
        render_into(&field, &b2w(), &mut img).unwrap();
        assert_eq!(img, vec![0u8; 3 * 3 * 4]);
    }

    #[test]
    fn single_splat_normalizes_to_max() {
        let mut field = DensityField::new(3, 3);
        field.add_point_with_stamp(1, 1, &cross());

        let expected = pixels([[T, HALF, T], [HALF, W, HALF], [T, HALF, T]]);
        assert_eq!(render(&field, &b2w()), expected);
    }

    #[test]
    fn repeated_splats_render_identically_after_normalization() {
        let scheme = b2w();
        let mut field = DensityField::new(3, 3);
        field.add_point_with_stamp(1, 1, &cross());
        let once = render(&field, &scheme);
        field.add_point_with_stamp(1, 1, &cross());
        assert_eq!(render(&field, &scheme), once);
    }

    #[test]
    fn manual_saturation_clips_to_top_color() {
        let scheme = b2w();
        let mut field = DensityField::new(3, 3);
        for _ in 0..3 {
            field.add_point_with_stamp(1, 1, &cross());
        }

        let mut img = vec![1u8; 3 * 3 * 4];
        render_saturated_into(&field, &scheme, 1.0, &mut img).unwrap();
        assert_eq!(img, pixels([[T, W, T], [W, W, W], [T, W, T]]));

        render_saturated_into(&field, &scheme, 2.0, &mut img).unwrap();
        assert_eq!(
            img,
            pixels([
                [T, THREE_QUARTERS, T],
                [THREE_QUARTERS, W, THREE_QUARTERS],
                [T, THREE_QUARTERS, T],
            ])
        );
    }

    #[test]
    fn render_equals_render_saturated_at_running_max() {
        let scheme = b2w().with_easing(Easing::Smoothstep);
        let mut rng = StdRng::seed_from_u64(11);
        let stamp = Stamp::linear(4);
        let mut field = DensityField::new(32, 20);
        for _ in 0..60 {
            field.add_point_with_stamp(rng.random_range(0..32), rng.random_range(0..20), &stamp);
        }
        assert_eq!(
            render(&field, &scheme),
            render_saturated(&field, &scheme, field.max())
        );
    }

    #[test]
    fn output_depends_only_on_value_over_saturation() {
        let scheme = b2w().with_easing(Easing::Cosine);
        let stamp = Stamp::linear(3);
        let mut small = DensityField::new(16, 16);
        let mut large = DensityField::new(16, 16);
        for (x, y) in [(3, 3), (4, 5), (10, 12), (15, 0)] {
            small.add_point_with_stamp(x, y, &stamp);
            large.add_weighted_point_with_stamp(x, y, 8.0, &stamp);
        }
        for level in [0.5f32, 1.0, 1.75, 3.0] {
            assert_eq!(
                render_saturated(&small, &scheme, level),
                render_saturated(&large, &scheme, level * 8.0)
            );
        }
    }

    #[test]
    fn non_positive_saturation_maps_everything_to_zero() {
        let scheme = b2w();
        let mut field = DensityField::new(3, 3);
        field.add_point_with_stamp(1, 1, &cross());
        let bottom = vec![0u8; 3 * 3 * 4];
        assert_eq!(render_saturated(&field, &scheme, 0.0), bottom);
        assert_eq!(render_saturated(&field, &scheme, -2.0), bottom);
        assert_eq!(render_saturated(&field, &scheme, f32::NAN), bottom);
    }

    #[test]
    fn opaque_scheme_never_emits_transparency() {
        let scheme = b2w().opaque();
        let mut field = DensityField::new(3, 3);
        field.add_point_with_stamp(0, 0, &cross());
        let img = render(&field, &scheme);
        assert!(img.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn rejects_wrongly_sized_buffers() {
        let field = DensityField::new(4, 2);
        let mut short = vec![0u8; 31];
        assert!(matches!(
            render_into(&field, &b2w(), &mut short),
            Err(Error::BufferSize {
                expected: 32,
                actual: 31
            })
        ));
        assert_eq!(render(&field, &b2w()).len(), 32);
    }

    #[test]
    fn renderer_reports_effective_saturation() {
        let scheme = b2w();
        let mut field = DensityField::new(2, 2);
        field.add_weighted_point(0, 1, 5.0);
        assert_eq!(Renderer::new(&scheme).saturation_for(&field), 5.0);
        assert_eq!(
            Renderer::new(&scheme)
                .with_saturation(2.5)
                .saturation_for(&field),
            2.5
        );
    }
}
