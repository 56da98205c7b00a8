//! Gradient color schemes used to colorize normalized densities.
//!
//! - Describe a gradient with ordered [`ColorStop`]s and wrap it in a [`ColorScheme`].
//! - Pick how stops blend with [`Interpolation`] and shape soft blends with [`Easing`].
//! - Hand named schemes to callers through a [`PaletteRegistry`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod registry;
pub mod scheme;

pub use registry::PaletteRegistry;
pub use scheme::{ColorScheme, Easing, Interpolation};

/// 8-bit RGBA color.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A gradient control point: `color` at `position` in `[0, 1]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub position: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(position: f32, color: Rgba) -> Self {
        Self { position, color }
    }
}
