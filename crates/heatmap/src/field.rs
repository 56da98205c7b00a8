//! Accumulated point density over a fixed raster.
//!
//! [`DensityField`] holds `width * height` weights in row-major order plus the running
//! maximum used to normalize renders. Splats only ever add, so the field is append-only.
use tracing::{debug, trace};

use crate::stamp::Stamp;

/// Grid of accumulated weights with an incrementally maintained maximum.
#[derive(Clone, Debug)]
pub struct DensityField {
    width: u32,
    height: u32,
    data: Vec<f32>,
    max: f32,
}

impl DensityField {
    /// Create a zero-filled field with a maximum of `0.0`.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        debug!(width, height, "creating density field");
        Self {
            width,
            height,
            data: vec![0.0; len],
            max: 0.0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Largest weight currently stored in the field.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Row-major weights, top row first.
    pub fn values(&self) -> &[f32] {
        &self.data
    }

    /// Weight at `(x, y)`, or `None` outside the field.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Whether `(x, y)` lies within `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Add a single unit of weight at `(x, y)`.
    ///
    /// Equivalent to splatting a 1x1 stamp of value `1.0`. Out-of-bounds points are ignored.
    #[inline]
    pub fn add_point(&mut self, x: u32, y: u32) {
        self.add_weighted_point(x, y, 1.0);
    }

    /// Add `weight` at `(x, y)`. Negative or `NaN` weights are ignored.
    #[inline]
    pub fn add_weighted_point(&mut self, x: u32, y: u32, weight: f32) {
        if !self.contains(x, y) || !(weight >= 0.0) {
            return;
        }
        let idx = self.index(x, y);
        let v = self.data[idx] + weight;
        self.data[idx] = v;
        if v > self.max {
            self.max = v;
        }
    }

    /// Splat `stamp` with its pin at `(x, y)`.
    ///
    /// Nothing happens unless the pin itself lies inside the field, even when part of the
    /// footprint would overlap it. Once the pin is inside, stamp cells falling outside the
    /// field are clipped individually.
    #[inline]
    pub fn add_point_with_stamp(&mut self, x: u32, y: u32, stamp: &Stamp) {
        self.splat(x, y, 1.0, stamp);
    }

    /// Splat `stamp` scaled by `weight`. Negative or `NaN` weights are ignored.
    #[inline]
    pub fn add_weighted_point_with_stamp(&mut self, x: u32, y: u32, weight: f32, stamp: &Stamp) {
        if !(weight >= 0.0) {
            return;
        }
        self.splat(x, y, weight, stamp);
    }

    /// Add a unit of weight for every point; returns how many points fell inside the field.
    pub fn add_points<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut accepted = 0;
        for (x, y) in points {
            if self.contains(x, y) {
                self.add_point(x, y);
                accepted += 1;
            }
        }
        accepted
    }

    /// Splat `stamp` at every point; returns how many pins fell inside the field.
    pub fn add_points_with_stamp<I>(&mut self, points: I, stamp: &Stamp) -> usize
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut accepted = 0;
        for (x, y) in points {
            if self.contains(x, y) {
                self.splat(x, y, 1.0, stamp);
                accepted += 1;
            }
        }
        accepted
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }

    fn splat(&mut self, x: u32, y: u32, weight: f32, stamp: &Stamp) {
        if !self.contains(x, y) {
            return;
        }

        // Stamp-space window that maps inside the field.
        let (px, py) = stamp.pin();
        let (x, y) = (x as i64, y as i64);
        let (px, py) = (px as i64, py as i64);
        let (sw, sh) = (stamp.width() as i64, stamp.height() as i64);
        let (w, h) = (self.width as i64, self.height as i64);

        let sx0 = (px - x).max(0);
        let sx1 = (w + px - x).min(sw);
        let sy0 = (py - y).max(0);
        let sy1 = (h + py - y).min(sh);
        if sx0 >= sx1 || sy0 >= sy1 {
            return;
        }

        let span = (sx1 - sx0) as usize;
        let stamp_data = stamp.values();
        let mut local_max = self.max;

        for sy in sy0..sy1 {
            let fy = (y + sy - py) as usize;
            let fx0 = (x + sx0 - px) as usize;
            let row_start = fy * (self.width as usize) + fx0;
            let stamp_start = (sy * sw + sx0) as usize;

            let row = &mut self.data[row_start..row_start + span];
            let weights = &stamp_data[stamp_start..stamp_start + span];
            for (cell, s) in row.iter_mut().zip(weights) {
                *cell += s * weight;
                if *cell > local_max {
                    local_max = *cell;
                }
            }
        }

        if stamp.is_non_negative() {
            self.max = local_max;
        } else {
            trace!("stamp has negative weights, rescanning field maximum");
            self.max = self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        }
    }
}
