#![forbid(unsafe_code)]
//! heatmap: density accumulation and gradient colorization for scattered points.
//!
//! Modules:
//! - stamp: point footprints (linear, shaped falloff, or loaded from data)
//! - field: append-only density grid with running-maximum tracking
//! - color: color stops, interpolation styles, and a name-keyed palette registry
//! - render: normalization with optional manual saturation into packed RGBA8
//!
//! A typical run builds one [`stamp::Stamp`], splats every input point onto a
//! [`field::DensityField`], then renders it through a [`color::ColorScheme`].
pub mod color;
pub mod error;
pub mod field;
pub mod render;
pub mod stamp;

/// Convenient re-exports for common types. Import with `use heatmap::prelude::*;`.
pub mod prelude {
    pub use crate::color::{ColorScheme, ColorStop, Easing, Interpolation, PaletteRegistry, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::field::DensityField;
    pub use crate::render::{
        render, render_into, render_saturated, render_saturated_into, Renderer,
    };
    pub use crate::stamp::Stamp;
}
