use std::path::Path;

use tracing::info;

use crate::color_mapper::LinearColorMapper;
use crate::config::ViewerConfig;
use crate::consts::PALETTE_STEPS;
use crate::discovery::{find_well_images, load_well_images, well_directory, WellId, WellImages};
use crate::error::Result;
use crate::layout::GridLayout;
use crate::linked::LinkedImagePairViewer;
use crate::palette::gray;
use crate::segmentation::Segmenter;

/// Stage of the single-well viewer, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WellStage {
    Locating,
    Loading,
    SegmentingBrightfield,
    SegmentingSignal,
    Rendering,
}

impl std::fmt::Display for WellStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Locating => write!(f, "Locating images"),
            Self::Loading => write!(f, "Loading images"),
            Self::SegmentingBrightfield => write!(f, "Segmenting brightfield"),
            Self::SegmentingSignal => write!(f, "Segmenting signal"),
            Self::Rendering => write!(f, "Rendering"),
        }
    }
}

/// Raw images beside their segmentations for one well.
#[derive(Clone, Debug)]
pub struct WellView {
    /// Brightfield image (left) and its labels (right).
    pub brightfield: GridLayout,
    /// Signal image (left) and its labels (right).
    pub signal: GridLayout,
    pub brightfield_area: usize,
    pub signal_area: usize,
}

/// Locate, load and segment one well, then build both linked pairs.
pub fn view_well(
    root: &Path,
    id: WellId,
    segmenter: &dyn Segmenter,
    config: &ViewerConfig,
) -> Result<WellView> {
    view_well_reported(root, id, segmenter, config, |_| {})
}

/// [`view_well`] with a callback invoked as each stage starts.
pub fn view_well_reported<F>(
    root: &Path,
    id: WellId,
    segmenter: &dyn Segmenter,
    config: &ViewerConfig,
    mut on_stage: F,
) -> Result<WellView>
where
    F: FnMut(WellStage),
{
    on_stage(WellStage::Locating);
    let dir = well_directory(root, id);
    let files = find_well_images(&dir)?;
    info!(well = %id, dir = %dir.display(), "Well images located");

    on_stage(WellStage::Loading);
    let images = load_well_images(&files)?;

    view_well_images(&images, segmenter, config, on_stage)
}

/// Segment already-loaded well images and build both linked pairs.
pub fn view_well_images<F>(
    images: &WellImages,
    segmenter: &dyn Segmenter,
    config: &ViewerConfig,
    mut on_stage: F,
) -> Result<WellView>
where
    F: FnMut(WellStage),
{
    on_stage(WellStage::SegmentingBrightfield);
    let bf = segmenter.segment_brightfield(&images.brightfield)?;

    on_stage(WellStage::SegmentingSignal);
    let sig = segmenter.segment_signal(&images.signal)?;
    info!(
        brightfield_area = bf.total_area,
        signal_area = sig.total_area,
        "Segmentation complete"
    );

    on_stage(WellStage::Rendering);
    let viewer = LinkedImagePairViewer::new(config.clone());
    let grays = || {
        [
            Some(LinearColorMapper::new(gray(PALETTE_STEPS))),
            Some(LinearColorMapper::new(gray(PALETTE_STEPS))),
        ]
    };
    let brightfield = viewer.show(&images.brightfield, &bf.label_image()?, grays())?;
    let signal = viewer.show(&images.signal, &sig.label_image()?, grays())?;

    Ok(WellView {
        brightfield,
        signal,
        brightfield_area: bf.total_area,
        signal_area: sig.total_area,
    })
}
