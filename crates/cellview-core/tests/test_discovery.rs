mod common;

use std::fs;
use std::path::Path;

use approx::assert_abs_diff_eq;

use cellview_core::discovery::{
    find_well_images, load_channel, load_well_images, well_directory, ChannelSelect, WellId,
};
use cellview_core::error::CellviewError;

fn touch(path: &Path) {
    fs::write(path, b"").unwrap();
}

#[test]
fn test_well_directory_zero_pads() {
    let root = Path::new("/data");
    let dir = well_directory(
        root,
        WellId {
            round: 1,
            plate: 2,
            well: 3,
        },
    );
    assert_eq!(dir, Path::new("/data/round_1/plate_2/XY03"));

    let dir = well_directory(
        root,
        WellId {
            round: 4,
            plate: 1,
            well: 12,
        },
    );
    assert!(dir.ends_with("round_4/plate_1/XY12"));
}

#[test]
fn test_well_id_display() {
    let id = WellId {
        round: 1,
        plate: 2,
        well: 7,
    };
    assert_eq!(id.to_string(), "round 1 / plate 2 / XY07");
}

#[test]
fn test_three_files_assigned_in_sorted_order() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["c_dapi.tif", "a_signal.tif", "b_bf.tif", "notes.txt"] {
        touch(&dir.path().join(name));
    }
    fs::create_dir(dir.path().join("d_folder.tif")).unwrap();

    let files = find_well_images(dir.path()).unwrap();
    assert_eq!(files.signal, dir.path().join("a_signal.tif"));
    assert_eq!(files.brightfield, dir.path().join("b_bf.tif"));
    assert_eq!(files.dapi, dir.path().join("c_dapi.tif"));
}

#[test]
fn test_wrong_file_count_is_error() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("a.tif"));
    touch(&dir.path().join("b.tif"));
    assert!(matches!(
        find_well_images(dir.path()),
        Err(CellviewError::WellImageCount { found: 2, .. })
    ));

    touch(&dir.path().join("c.tif"));
    touch(&dir.path().join("d.tif"));
    assert!(matches!(
        find_well_images(dir.path()),
        Err(CellviewError::WellImageCount { found: 4, .. })
    ));
}

#[test]
fn test_missing_directory_finds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        find_well_images(&dir.path().join("XY01")),
        Err(CellviewError::WellImageCount { found: 0, .. })
    ));
}

#[test]
fn test_load_channel_extracts_and_scales() {
    let dir = tempfile::tempdir().unwrap();
    let data = common::two_blob_data(0.25, 1.0);

    let rgb = dir.path().join("rgb.tif");
    common::write_rgb_tiff(&rgb, &data, 1, 0);
    let green = load_channel(&rgb, ChannelSelect::Rgb(1)).unwrap();
    assert_eq!(green.shape(), (20, 20));
    assert_abs_diff_eq!(green.data()[[3, 3]], 1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(green.data()[[0, 0]], 0.25, epsilon = 1e-4);
    let red = load_channel(&rgb, ChannelSelect::Rgb(0)).unwrap();
    assert_eq!(red.min_max(), (0.0, 0.0));

    let gray = dir.path().join("gray.tif");
    common::write_gray_tiff(&gray, &data);
    let luma = load_channel(&gray, ChannelSelect::Luminance).unwrap();
    assert_abs_diff_eq!(luma.data()[[11, 11]], 1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(luma.data()[[19, 0]], 0.25, epsilon = 1e-4);
}

#[test]
fn test_load_well_images_picks_channels() {
    let dir = tempfile::tempdir().unwrap();
    let blobs = common::two_blob_data(0.0, 1.0);
    common::write_rgb_tiff(&dir.path().join("a.tif"), &blobs, 1, 0);
    common::write_gray_tiff(&dir.path().join("b.tif"), &blobs);
    common::write_rgb_tiff(&dir.path().join("c.tif"), &blobs, 2, 0);

    let files = find_well_images(dir.path()).unwrap();
    let images = load_well_images(&files).unwrap();
    for image in [&images.signal, &images.brightfield, &images.dapi] {
        assert_eq!(image.shape(), (20, 20));
        assert_abs_diff_eq!(image.data()[[3, 3]], 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(image.data()[[0, 0]], 0.0, epsilon = 1e-4);
    }
}

#[test]
fn test_unreadable_image_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.tif");
    touch(&path);
    assert!(load_channel(&path, ChannelSelect::Luminance).is_err());
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_error() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let well = dir.path().join("XY01");
    fs::create_dir(&well).unwrap();
    touch(&well.join("a.tif"));
    fs::set_permissions(&well, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not restrict root.
    let readable = fs::read_dir(&well).is_ok();
    let result = find_well_images(&well);
    fs::set_permissions(&well, fs::Permissions::from_mode(0o755)).unwrap();
    if readable {
        return;
    }
    assert!(matches!(result, Err(CellviewError::Glob(_))), "got: {result:?}");
}
