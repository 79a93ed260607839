mod common;

use std::fs;
use std::path::Path;

use cellview_core::config::ViewerConfig;
use cellview_core::discovery::WellId;
use cellview_core::error::CellviewError;
use cellview_core::segmentation::ThresholdSegmenter;
use cellview_core::well::{view_well, view_well_reported, WellStage};

const ID: WellId = WellId {
    round: 1,
    plate: 2,
    well: 3,
};

fn write_well(root: &Path) {
    let dir = root.join("round_1").join("plate_2").join("XY03");
    fs::create_dir_all(&dir).unwrap();
    common::write_rgb_tiff(
        &dir.join("a_signal.tif"),
        &common::two_blob_data(0.1, 0.9),
        1,
        0,
    );
    common::write_gray_tiff(&dir.join("b_bf.tif"), &common::two_blob_data(0.9, 0.1));
    common::write_rgb_tiff(
        &dir.join("c_dapi.tif"),
        &common::two_blob_data(0.0, 0.5),
        2,
        0,
    );
}

#[test]
fn test_view_well_end_to_end() {
    let root = tempfile::tempdir().unwrap();
    write_well(root.path());

    let view = view_well(
        root.path(),
        ID,
        &ThresholdSegmenter::default(),
        &ViewerConfig::default(),
    )
    .unwrap();
    assert_eq!(view.brightfield_area, 32);
    assert_eq!(view.signal_area, 32);

    for layout in [&view.brightfield, &view.signal] {
        assert_eq!(layout.len(), 2);
        let left = &layout.panels()[0];
        let right = &layout.panels()[1];
        assert!(left.x_range.is_shared_with(&right.x_range));
        assert!(left.y_range.is_shared_with(&right.y_range));
        assert_eq!(left.image_glyph().unwrap().image.shape(), (20, 20));
    }

    let labels = &view.signal.panels()[1].image_glyph().unwrap().image;
    assert_eq!(labels.min_max(), (0.0, 2.0));
}

#[test]
fn test_stages_reported_in_order() {
    let root = tempfile::tempdir().unwrap();
    write_well(root.path());

    let mut stages = Vec::new();
    view_well_reported(
        root.path(),
        ID,
        &ThresholdSegmenter::default(),
        &ViewerConfig::default(),
        |stage| stages.push(stage),
    )
    .unwrap();
    assert_eq!(
        stages,
        vec![
            WellStage::Locating,
            WellStage::Loading,
            WellStage::SegmentingBrightfield,
            WellStage::SegmentingSignal,
            WellStage::Rendering,
        ]
    );
}

#[test]
fn test_missing_well_is_error() {
    let root = tempfile::tempdir().unwrap();
    write_well(root.path());

    let other = WellId { well: 4, ..ID };
    let err = view_well(
        root.path(),
        other,
        &ThresholdSegmenter::default(),
        &ViewerConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CellviewError::WellImageCount { found: 0, .. }));
}
