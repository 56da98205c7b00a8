//! Stop-list gradients and the interpolation rules applied between stops.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ColorStop, Rgba};
use crate::error::{Error, Result};

/// Slopes of the mixed alpha ramps; alpha saturates at `t = 1 / rise`.
const MIXED_ALPHA_RISE: f32 = 30.0;
const MIXED_EXP_ALPHA_RISE: f32 = 100.0;
const MIXED_EXP_POWER: i32 = 10;

/// Blending rule applied between neighbouring stops.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Color of the greatest stop at or below the query position. No blending.
    Discrete,
    /// Eased blend of all four channels between the surrounding stops.
    Soft,
    /// Eased blend of RGB; alpha follows a steep ramp from the first stop's alpha to
    /// the last stop's, so only values at (or very near) zero stay transparent.
    ///
    /// With [`ColorScheme::with_stop_mix`] the RGB blend is pulled towards the nearest
    /// stop, overlaying a stair pattern on the smooth gradient.
    #[default]
    Mixed,
    /// Like [`Interpolation::Mixed`], but positions are first warped with
    /// `1 - (1 - t)^10` to spread out low densities.
    MixedExp,
}

/// Easing curve applied to the local fraction between two stops.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    /// `u^2 (3 - 2u)`
    #[default]
    Smoothstep,
    /// `(1 - cos(pi u)) / 2`
    Cosine,
}

impl Easing {
    /// Map `u` in `[0, 1]` monotonically onto `[0, 1]`, fixing both endpoints.
    #[inline]
    pub fn apply(self, u: f32) -> f32 {
        let u = u.clamp(0.0, 1.0);
        match self {
            Easing::Linear => u,
            Easing::Smoothstep => u * u * (3.0 - 2.0 * u),
            Easing::Cosine => {
                if u >= 1.0 {
                    1.0
                } else {
                    0.5 - 0.5 * (std::f32::consts::PI * u).cos()
                }
            }
        }
    }
}

/// Immutable gradient over `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScheme {
    stops: Vec<ColorStop>,
    interpolation: Interpolation,
    easing: Easing,
    stop_mix: f32,
    opaque: bool,
}

impl ColorScheme {
    /// Build a scheme from stops sorted by strictly increasing position, starting at `0.0`
    /// and ending at `1.0`.
    pub fn new(stops: impl Into<Vec<ColorStop>>, interpolation: Interpolation) -> Result<Self> {
        let stops = stops.into();
        validate_stops(&stops)?;
        Ok(Self {
            stops,
            interpolation,
            easing: Easing::default(),
            stop_mix: 0.0,
            opaque: false,
        })
    }

    /// Build a scheme from colors spread evenly over `[0, 1]`.
    pub fn evenly_spaced(colors: &[Rgba], interpolation: Interpolation) -> Result<Self> {
        if colors.len() < 2 {
            return Err(Error::InvalidColorScheme(format!(
                "need at least two colors, got {}",
                colors.len()
            )));
        }
        let last = (colors.len() - 1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let position = if i + 1 == colors.len() {
                    1.0
                } else {
                    i as f32 / last
                };
                ColorStop::new(position, *c)
            })
            .collect::<Vec<_>>();
        Self::new(stops, interpolation)
    }

    /// Force alpha to 255 everywhere.
    pub fn opaque(mut self) -> Self {
        self.opaque = true;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Weight in `[0, 1]` of the nearest stop's RGB in the mixed styles. Out-of-range
    /// weights are clamped and `NaN` disables the mix.
    pub fn with_stop_mix(mut self, weight: f32) -> Self {
        self.stop_mix = if weight.is_nan() {
            0.0
        } else {
            weight.clamp(0.0, 1.0)
        };
        self
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn stop_mix(&self) -> f32 {
        self.stop_mix
    }

    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Color at position `t`, quantized by truncating each channel.
    ///
    /// `t` is clamped to `[0, 1]`; `NaN` is treated as `0`.
    #[inline]
    pub fn rgba8_at(&self, t: f32) -> Rgba {
        let c = self.sample(t);
        let q = |v: f32| v.clamp(0.0, 255.0) as u8;
        Rgba::new(q(c[0]), q(c[1]), q(c[2]), q(c[3]))
    }

    // Channels on the 0..=255 scale, so stop colors come back exactly.
    fn sample(&self, t: f32) -> [f32; 4] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let mut c = match self.interpolation {
            Interpolation::Discrete => {
                let (lo, _) = self.segment(t);
                channels(lo.color)
            }
            Interpolation::Soft => self.blend(t),
            Interpolation::Mixed => self.mixed(t, t, MIXED_ALPHA_RISE),
            Interpolation::MixedExp => {
                let warped = 1.0 - (1.0 - t).powi(MIXED_EXP_POWER);
                self.mixed(warped, t, MIXED_EXP_ALPHA_RISE)
            }
        };

        if self.opaque {
            c[3] = 255.0;
        }
        c
    }

    /// Stop at or below `t` and the stop after it, if any.
    #[inline]
    fn segment(&self, t: f32) -> (&ColorStop, Option<&ColorStop>) {
        // The first stop sits at 0, so at least one stop is <= t.
        let idx = self.stops.partition_point(|s| s.position <= t).max(1);
        (&self.stops[idx - 1], self.stops.get(idx))
    }

    /// Stop whose position is closest to `t`; ties go to the upper stop.
    fn nearest(&self, t: f32) -> &ColorStop {
        match self.segment(t) {
            (lo, Some(hi)) if t >= (lo.position + hi.position) * 0.5 => hi,
            (lo, _) => lo,
        }
    }

    // RGB looked up at `lookup`, alpha ramped on the unwarped `t`.
    fn mixed(&self, lookup: f32, t: f32, rise: f32) -> [f32; 4] {
        let mut c = self.blend(lookup);
        if self.stop_mix > 0.0 {
            let near = channels(self.nearest(lookup).color);
            for (ch, n) in c.iter_mut().zip(near).take(3) {
                *ch = lerp(*ch, n, self.stop_mix);
            }
        }
        c[3] = self.alpha_ramp(t, rise);
        c
    }

    fn blend(&self, t: f32) -> [f32; 4] {
        let (lo, hi) = self.segment(t);
        let Some(hi) = hi else {
            return channels(lo.color);
        };
        let u = (t - lo.position) / (hi.position - lo.position);
        let e = self.easing.apply(u);
        let (a, b) = (channels(lo.color), channels(hi.color));
        [
            lerp(a[0], b[0], e),
            lerp(a[1], b[1], e),
            lerp(a[2], b[2], e),
            lerp(a[3], b[3], e),
        ]
    }

    fn alpha_ramp(&self, t: f32, rise: f32) -> f32 {
        let first = self.stops[0].color.a as f32;
        let last = self.stops[self.stops.len() - 1].color.a as f32;
        lerp(first, last, (t * rise).min(1.0))
    }
}

#[inline]
fn channels(c: Rgba) -> [f32; 4] {
    [c.r as f32, c.g as f32, c.b as f32, c.a as f32]
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn validate_stops(stops: &[ColorStop]) -> Result<()> {
    if stops.len() < 2 {
        return Err(Error::InvalidColorScheme(format!(
            "need at least two stops, got {}",
            stops.len()
        )));
    }
    if let Some(s) = stops.iter().find(|s| !s.position.is_finite()) {
        return Err(Error::InvalidColorScheme(format!(
            "stop position {} is not finite",
            s.position
        )));
    }
    if stops[0].position != 0.0 {
        return Err(Error::InvalidColorScheme(format!(
            "first stop must sit at 0, got {}",
            stops[0].position
        )));
    }
    let last = stops[stops.len() - 1].position;
    if last != 1.0 {
        return Err(Error::InvalidColorScheme(format!(
            "last stop must sit at 1, got {last}"
        )));
    }
    if let Some(w) = stops.windows(2).find(|w| w[0].position >= w[1].position) {
        return Err(Error::InvalidColorScheme(format!(
            "stop positions must strictly increase, got {} then {}",
            w[0].position, w[1].position
        )));
    }
    Ok(())
}
