use std::sync::Arc;

use ndarray::{Array2, ArrayD, Ix2};

use crate::error::{CellviewError, Result};

/// A validated 2D intensity image.
///
/// Data is shared immutably, so cloning an `Image` (or a panel holding one)
/// never copies pixels. Shape = (height, width), row-major.
#[derive(Clone, Debug)]
pub struct Image {
    data: Arc<Array2<f32>>,
}

impl Image {
    /// Wrap a 2D array. Fails on an empty array or any non-finite value.
    pub fn new(data: Array2<f32>) -> Result<Self> {
        let (h, w) = data.dim();
        if h == 0 || w == 0 {
            return Err(CellviewError::InvalidImage(format!(
                "empty array of shape {h}x{w}"
            )));
        }
        if let Some(idx) = data.iter().position(|v| !v.is_finite()) {
            return Err(CellviewError::InvalidImage(format!(
                "non-finite value at flat index {idx}"
            )));
        }
        Ok(Self {
            data: Arc::new(data),
        })
    }

    /// Accept an array of unknown dimensionality; anything but 2D is rejected.
    pub fn from_dyn(data: ArrayD<f32>) -> Result<Self> {
        let ndim = data.ndim();
        let data = data
            .into_dimensionality::<Ix2>()
            .map_err(|_| CellviewError::InvalidImage(format!("expected 2 dimensions, got {ndim}")))?;
        Self::new(data)
    }

    pub fn from_shape_vec(height: usize, width: usize, values: Vec<f32>) -> Result<Self> {
        let data = Array2::from_shape_vec((height, width), values)
            .map_err(|e| CellviewError::InvalidImage(e.to_string()))?;
        Self::new(data)
    }

    /// Convert a label map into a displayable image (label ids as intensities).
    pub fn from_labels(labels: &Array2<u32>) -> Result<Self> {
        Self::new(labels.mapv(|l| l as f32))
    }

    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// (height, width)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Minimum and maximum pixel value.
    pub fn min_max(&self) -> (f32, f32) {
        self.data
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// True if both handles point at the same pixel buffer.
    pub fn ptr_eq(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}
