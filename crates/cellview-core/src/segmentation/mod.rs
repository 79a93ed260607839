pub mod components;
pub mod morphology;
pub mod threshold;

use ndarray::Array2;
use tracing::debug;

use crate::config::{Polarity, SegmentationConfig};
use crate::error::Result;
use crate::raster::Image;

use components::{label_components, remove_small};
use morphology::opening;
use threshold::compute_threshold;

/// Labeled regions found in one image.
#[derive(Clone, Debug)]
pub struct Segmentation {
    /// 0 = background, 1..=count = regions.
    pub labels: Array2<u32>,
    /// Total foreground area in pixels.
    pub total_area: usize,
    pub count: usize,
}

impl Segmentation {
    /// The label map as a displayable image.
    pub fn label_image(&self) -> Result<Image> {
        Image::from_labels(&self.labels)
    }
}

/// Splits brightfield and signal images into labeled regions.
pub trait Segmenter: Send + Sync {
    fn segment_brightfield(&self, image: &Image) -> Result<Segmentation>;
    fn segment_signal(&self, image: &Image) -> Result<Segmentation>;
}

/// Global threshold, optional opening, connected components, area filter.
#[derive(Clone, Debug, Default)]
pub struct ThresholdSegmenter {
    pub config: SegmentationConfig,
}

impl ThresholdSegmenter {
    pub fn new(config: SegmentationConfig) -> Self {
        Self { config }
    }

    pub fn segment(&self, image: &Image, polarity: Polarity) -> Segmentation {
        let data = image.data();
        let threshold = compute_threshold(data, &self.config.threshold_method);
        let mut mask = match polarity {
            Polarity::Above => data.mapv(|v| v > threshold),
            Polarity::Below => data.mapv(|v| v <= threshold),
        };
        if self.config.open_mask {
            mask = opening(&mask);
        }

        let (labels, stats) = label_components(&mask);
        let (labels, kept) = remove_small(&labels, &stats, self.config.min_area);
        let total_area = kept.iter().map(|s| s.area).sum();

        debug!(
            threshold,
            ?polarity,
            regions = kept.len(),
            dropped = stats.len() - kept.len(),
            total_area,
            "Segmented image"
        );
        Segmentation {
            labels,
            total_area,
            count: kept.len(),
        }
    }
}

impl Segmenter for ThresholdSegmenter {
    fn segment_brightfield(&self, image: &Image) -> Result<Segmentation> {
        Ok(self.segment(image, self.config.brightfield_polarity))
    }

    fn segment_signal(&self, image: &Image) -> Result<Segmentation> {
        Ok(self.segment(image, self.config.signal_polarity))
    }
}
