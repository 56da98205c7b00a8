#![forbid(unsafe_code)]
//! heatmap_palettes: named gradients for the `heatmap` crate.
//!
//! Every family is available in each [`Interpolation`] style, with and without
//! transparency, under names like `Blues_discrete`, `Blues_mixed_exp` or
//! `Spectral_soft_opaque`. The gray ramps are registered as `b2w` (black to white),
//! `w2b`, and their `_opaque` forms.
//!
//! Transparent variants start with a clear stop at exactly 0 and put the first family
//! color just above it, so only empty cells vanish. The mixed styles pull each color
//! towards the nearest keypoint, overlaying soft stairs on the gradient.
use heatmap::color::{ColorScheme, ColorStop, Easing, Interpolation, PaletteRegistry, Rgba};
use heatmap::error::{Error, Result};
use tracing::debug;

mod brewer;

use brewer::FAMILIES;

/// Position of the first family color in transparent variants.
const FIRST_COLOR_POSITION: f32 = f32::MIN_POSITIVE;

/// Weight of the nearest keypoint in the mixed styles.
const STOP_MIX: f32 = 0.2;

/// Name of the scheme returned by [`default_scheme`].
pub const DEFAULT_SCHEME: &str = "Spectral_mixed_exp";

/// Name suffix for each interpolation style.
pub const STYLES: [(&str, Interpolation); 4] = [
    ("discrete", Interpolation::Discrete),
    ("soft", Interpolation::Soft),
    ("mixed", Interpolation::Mixed),
    ("mixed_exp", Interpolation::MixedExp),
];

/// Names of the gradient families, without style suffixes.
pub fn family_names() -> impl Iterator<Item = &'static str> {
    FAMILIES.iter().map(|f| f.name)
}

/// Build family `name` in the given style.
pub fn family(name: &str, interpolation: Interpolation, opaque: bool) -> Result<ColorScheme> {
    let family = FAMILIES
        .iter()
        .find(|f| f.name == name)
        .ok_or_else(|| Error::UnknownPalette {
            name: name.to_owned(),
        })?;

    let colors: Vec<Rgba> = family
        .colors
        .iter()
        .map(|&[r, g, b]| Rgba::rgb(r, g, b))
        .collect();
    let scheme = ColorScheme::evenly_spaced(&colors, interpolation)?;

    let scheme = if opaque {
        scheme.opaque()
    } else {
        let mut stops = scheme.stops().to_vec();
        if let Some(first) = stops.first_mut() {
            first.position = FIRST_COLOR_POSITION;
        }
        stops.insert(0, ColorStop::new(0.0, Rgba::TRANSPARENT));
        ColorScheme::new(stops, interpolation)?
    };
    Ok(scheme.with_stop_mix(STOP_MIX))
}

/// Linear black-to-white ramp, transparent only at zero.
pub fn b2w() -> Result<ColorScheme> {
    gray_ramp(Rgba::TRANSPARENT, Rgba::rgb(255, 255, 255))
}

/// Linear white-to-black ramp, transparent only at zero.
pub fn w2b() -> Result<ColorScheme> {
    gray_ramp(Rgba::new(255, 255, 255, 0), Rgba::rgb(0, 0, 0))
}

fn gray_ramp(low: Rgba, high: Rgba) -> Result<ColorScheme> {
    let scheme = ColorScheme::new(
        [ColorStop::new(0.0, low), ColorStop::new(1.0, high)],
        Interpolation::Mixed,
    )?;
    Ok(scheme.with_easing(Easing::Linear))
}

/// The scheme registered as [`DEFAULT_SCHEME`].
pub fn default_scheme() -> Result<ColorScheme> {
    family("Spectral", Interpolation::MixedExp, false)
}

/// Register every palette into `registry`.
pub fn register_all(registry: &mut PaletteRegistry) -> Result<()> {
    let before = registry.len();

    registry.register("b2w", b2w()?);
    registry.register("b2w_opaque", b2w()?.opaque());
    registry.register("w2b", w2b()?);
    registry.register("w2b_opaque", w2b()?.opaque());

    for name in family_names() {
        for (suffix, interpolation) in STYLES {
            registry.register(
                format!("{name}_{suffix}"),
                family(name, interpolation, false)?,
            );
            registry.register(
                format!("{name}_{suffix}_opaque"),
                family(name, interpolation, true)?,
            );
        }
    }

    debug!(count = registry.len() - before, "registered palettes");
    Ok(())
}

/// A fresh registry holding every palette.
pub fn registry() -> Result<PaletteRegistry> {
    let mut registry = PaletteRegistry::with_capacity(4 + FAMILIES.len() * STYLES.len() * 2);
    register_all(&mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_every_family_and_style() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), 4 + 27 * 4 * 2);
        for name in family_names() {
            for (suffix, interpolation) in STYLES {
                let scheme = registry.require(&format!("{name}_{suffix}")).unwrap();
                assert_eq!(scheme.interpolation(), interpolation);
                assert!(!scheme.is_opaque());
                let opaque = registry
                    .require(&format!("{name}_{suffix}_opaque"))
                    .unwrap();
                assert!(opaque.is_opaque());
            }
        }
        assert!(registry.contains(DEFAULT_SCHEME));
    }

    #[test]
    fn transparent_variants_are_clear_only_at_zero() {
        for (suffix, interpolation) in STYLES {
            let scheme = family("Blues", interpolation, false).unwrap();
            assert_eq!(scheme.rgba8_at(0.0), Rgba::TRANSPARENT, "{suffix}");
            for t in [0.05f32, 0.1, 0.5] {
                assert_eq!(scheme.rgba8_at(t).a, 255, "{suffix} at {t}");
            }
            assert_eq!(scheme.rgba8_at(1.0), Rgba::rgb(8, 48, 107), "{suffix}");
        }
    }

    #[test]
    fn discrete_bands_keep_their_family_colors() {
        let clear = family("Blues", Interpolation::Discrete, false).unwrap();
        let opaque = family("Blues", Interpolation::Discrete, true).unwrap();
        assert_eq!(clear.rgba8_at(0.1), Rgba::rgb(247, 251, 255));
        assert_eq!(clear.rgba8_at(0.125), Rgba::rgb(222, 235, 247));
        for i in 1..=16 {
            let t = i as f32 / 16.0;
            assert_eq!(clear.rgba8_at(t), opaque.rgba8_at(t), "at {t}");
        }
        assert_eq!(opaque.rgba8_at(0.0), Rgba::rgb(247, 251, 255));
    }

    #[test]
    fn mixed_styles_lean_towards_the_nearest_keypoint() {
        let mixed = family("Greys", Interpolation::Mixed, true).unwrap();
        let soft = family("Greys", Interpolation::Soft, true).unwrap();
        assert_eq!(mixed.stop_mix(), STOP_MIX);
        // Below the first segment's midpoint the mix leans back to white.
        assert_eq!(soft.rgba8_at(0.05).r, 249);
        assert_eq!(mixed.rgba8_at(0.05).r, 250);
        assert_eq!(mixed.rgba8_at(0.5), soft.rgba8_at(0.5));
    }

    #[test]
    fn diverging_families_start_at_the_cool_end() {
        let rdbu = family("RdBu", Interpolation::Soft, true).unwrap();
        assert_eq!(rdbu.rgba8_at(0.0), Rgba::rgb(5, 48, 97));
        assert_eq!(rdbu.rgba8_at(1.0), Rgba::rgb(103, 0, 31));
        assert_eq!(family_names().count(), 27);
    }

    #[test]
    fn gray_ramps_are_linear() {
        let b2w = b2w().unwrap();
        assert_eq!(b2w.rgba8_at(0.75), Rgba::rgb(191, 191, 191));
        let w2b = w2b().unwrap();
        assert_eq!(w2b.rgba8_at(0.0), Rgba::new(255, 255, 255, 0));
        assert_eq!(w2b.rgba8_at(1.0), Rgba::rgb(0, 0, 0));
    }

    #[test]
    fn unknown_family_is_an_error() {
        assert!(matches!(
            family("Magma", Interpolation::Soft, false),
            Err(Error::UnknownPalette { .. })
        ));
    }

    #[test]
    fn default_scheme_matches_registry_entry() {
        let registry = registry().unwrap();
        assert_eq!(
            &default_scheme().unwrap(),
            registry.get(DEFAULT_SCHEME).unwrap()
        );
    }
}
