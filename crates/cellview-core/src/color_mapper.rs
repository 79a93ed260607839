use ndarray::{Array2, ArrayView1, ArrayViewMut1, Axis};
use rayon::prelude::*;

use crate::consts::{PALETTE_STEPS, PARALLEL_PIXEL_THRESHOLD};
use crate::palette::{gray, Color, Palette};
use crate::raster::Image;

/// Maps scalar values linearly onto a palette.
///
/// `low`/`high` default to the data range of whatever is being mapped.
/// Values outside the range clamp to the first/last palette entry.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearColorMapper {
    pub palette: Palette,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl LinearColorMapper {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            low: None,
            high: None,
        }
    }

    pub fn with_bounds(palette: Palette, low: f64, high: f64) -> Self {
        Self {
            palette,
            low: Some(low),
            high: Some(high),
        }
    }

    /// Explicit bounds where set, data min/max otherwise.
    pub fn resolve_bounds(&self, data_min: f64, data_max: f64) -> (f64, f64) {
        (self.low.unwrap_or(data_min), self.high.unwrap_or(data_max))
    }

    /// Bounds this mapper would use for `image`.
    pub fn bounds_for(&self, image: &Image) -> (f64, f64) {
        let (lo, hi) = image.min_max();
        self.resolve_bounds(lo as f64, hi as f64)
    }

    /// Map `value` with already-resolved bounds.
    pub fn color_at(&self, value: f64, low: f64, high: f64) -> Color {
        self.palette.colors()[self.index_of(value, low, high)]
    }

    /// Palette index for `value`: floor((v - low) / (high - low) * n), clamped.
    pub fn index_of(&self, value: f64, low: f64, high: f64) -> usize {
        let n = self.palette.len();
        let span = high - low;
        if !(span > 0.0) || !value.is_finite() {
            return 0;
        }
        let scaled = ((value - low) / span * n as f64).floor();
        if scaled <= 0.0 {
            0
        } else {
            (scaled as usize).min(n - 1)
        }
    }

    /// Colorize every pixel of `image`, row-major, as RGB triples.
    pub fn colorize(&self, image: &Image) -> Array2<[u8; 3]> {
        let (low, high) = self.bounds_for(image);
        let data = image.data();
        let mut out = Array2::from_elem(data.dim(), [0u8; 3]);

        if data.len() >= PARALLEL_PIXEL_THRESHOLD {
            data.axis_iter(Axis(0))
                .into_par_iter()
                .zip(out.axis_iter_mut(Axis(0)).into_par_iter())
                .for_each(|(src, dst)| self.fill_row(src, dst, low, high));
        } else {
            for (src, dst) in data.axis_iter(Axis(0)).zip(out.axis_iter_mut(Axis(0))) {
                self.fill_row(src, dst, low, high);
            }
        }
        out
    }

    fn fill_row(&self, src: ArrayView1<f32>, mut dst: ArrayViewMut1<[u8; 3]>, low: f64, high: f64) {
        for (v, px) in src.iter().zip(dst.iter_mut()) {
            *px = self.color_at(*v as f64, low, high).to_rgb();
        }
    }
}

impl Default for LinearColorMapper {
    fn default() -> Self {
        Self::new(gray(PALETTE_STEPS))
    }
}
