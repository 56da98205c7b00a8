//! Point footprints ("stamps") splatted onto a [`DensityField`](crate::field::DensityField).
//!
//! A [`Stamp`] is an immutable grid of weights with a *pin*, the cell that lands on the
//! target coordinate during a splat. Generated stamps are square with side `2r + 1` and
//! pinned at their exact center; loaded stamps may have any shape and are pinned at
//! `(width / 2, height / 2)`.
use crate::error::{Error, Result};

/// Largest radius whose cell count `(2r + 1)^2` still fits in a `u32`.
pub const MAX_RADIUS: u32 = (u16::MAX as u32 - 1) / 2;

/// Immutable 2D weight kernel describing the footprint of a single point.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
    width: u32,
    height: u32,
    pin: (u32, u32),
    data: Vec<f32>,
    non_negative: bool,
}

impl Stamp {
    /// Create a radial stamp whose weight falls off linearly from `1.0` at the pin
    /// to `0.0` at distance `radius + 1`.
    ///
    /// # Panics
    ///
    /// If `radius` exceeds [`MAX_RADIUS`].
    pub fn linear(radius: u32) -> Self {
        Self::nonlinear(radius, |t| t)
    }

    /// Create a radial stamp where the normalized distance `t` is shaped by `falloff`.
    ///
    /// Each cell gets `1 - clamp(falloff(t), 0, 1)` with `t = dist / (radius + 1)`, so any
    /// function is accepted. Sub-linear curves such as `t^6` give fatter footprints and
    /// super-linear ones such as `sqrt(t)` give pointier ones. A `NaN` result counts as
    /// full falloff.
    ///
    /// # Panics
    ///
    /// If `radius` exceeds [`MAX_RADIUS`].
    pub fn nonlinear<F>(radius: u32, falloff: F) -> Self
    where
        F: Fn(f32) -> f32,
    {
        assert!(
            radius <= MAX_RADIUS,
            "stamp radius {radius} exceeds {MAX_RADIUS}"
        );
        let r = radius as i64;
        let side = 2 * (radius as usize) + 1;
        let norm = (radius as f32) + 1.0;

        let mut data = Vec::with_capacity(side * side);
        for y in 0..side as i64 {
            let dy = (y - r) as f32;
            for x in 0..side as i64 {
                let dx = (x - r) as f32;
                let t = (dx * dx + dy * dy).sqrt() / norm;
                let f = falloff(t);
                let f = if f.is_nan() { 1.0 } else { f.clamp(0.0, 1.0) };
                data.push(1.0 - f);
            }
        }

        Self {
            width: side as u32,
            height: side as u32,
            pin: (radius, radius),
            data,
            non_negative: true,
        }
    }

    /// Wrap caller-provided weights in row-major order.
    ///
    /// The data is taken verbatim: no range check, no shape constraint. Fails when either
    /// dimension is zero or when `data` does not hold exactly `width * height` values.
    pub fn load(width: u32, height: u32, data: impl Into<Vec<f32>>) -> Result<Self> {
        let data = data.into();
        if width == 0 || height == 0 {
            return Err(Error::InvalidStamp(format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidStamp(format!(
                "{width}x{height} stamp needs {expected} values, got {}",
                data.len()
            )));
        }
        let non_negative = data.iter().all(|v| *v >= 0.0);

        Ok(Self {
            width,
            height,
            pin: (width / 2, height / 2),
            data,
            non_negative,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Stamp cell aligned with the target coordinate during a splat.
    pub fn pin(&self) -> (u32, u32) {
        self.pin
    }

    /// Row-major weights.
    pub fn values(&self) -> &[f32] {
        &self.data
    }

    /// Weight at stamp cell `(x, y)`, or `None` outside the stamp.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get((y as usize) * (self.width as usize) + x as usize)
            .copied()
    }

    /// `false` when any weight is negative (or `NaN`), which breaks incremental
    /// maximum tracking on the field.
    pub fn is_non_negative(&self) -> bool {
        self.non_negative
    }
}
