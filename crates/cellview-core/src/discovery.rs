use std::path::{Path, PathBuf};

use image::DynamicImage;
use ndarray::Array2;
use tracing::info;

use crate::error::{CellviewError, Result};
use crate::raster::Image;

/// Identifies one well of one plate in one imaging round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WellId {
    pub round: u32,
    pub plate: u32,
    pub well: u32,
}

impl std::fmt::Display for WellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "round {} / plate {} / XY{:02}",
            self.round, self.plate, self.well
        )
    }
}

/// `root/round_<R>/plate_<P>/XY<WW>`, well zero-padded to two digits.
pub fn well_directory(root: &Path, id: WellId) -> PathBuf {
    root.join(format!("round_{}", id.round))
        .join(format!("plate_{}", id.plate))
        .join(format!("XY{:02}", id.well))
}

/// The three TIFF files acquired for one well.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WellFiles {
    pub signal: PathBuf,
    pub brightfield: PathBuf,
    pub dapi: PathBuf,
}

/// Find the well's `*.tif` files. Exactly three are expected; in sorted
/// order they are the signal, brightfield and DAPI acquisitions.
pub fn find_well_images(dir: &Path) -> Result<WellFiles> {
    let pattern = dir.join("*.tif");
    let mut files = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    match <[PathBuf; 3]>::try_from(files) {
        Ok([signal, brightfield, dapi]) => Ok(WellFiles {
            signal,
            brightfield,
            dapi,
        }),
        Err(files) => Err(CellviewError::WellImageCount {
            dir: dir.to_path_buf(),
            found: files.len(),
        }),
    }
}

/// Float images for one well, scaled to [0, 1].
#[derive(Clone, Debug)]
pub struct WellImages {
    /// Green channel of the signal acquisition.
    pub signal: Image,
    /// Luminance of the brightfield acquisition.
    pub brightfield: Image,
    /// Blue channel of the DAPI acquisition.
    pub dapi: Image,
}

/// Which part of a decoded TIFF to keep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelSelect {
    Luminance,
    Rgb(usize),
}

pub fn load_well_images(files: &WellFiles) -> Result<WellImages> {
    let images = WellImages {
        signal: load_channel(&files.signal, ChannelSelect::Rgb(1))?,
        brightfield: load_channel(&files.brightfield, ChannelSelect::Luminance)?,
        dapi: load_channel(&files.dapi, ChannelSelect::Rgb(2))?,
    };
    info!(
        shape = ?images.signal.shape(),
        "Well images loaded"
    );
    Ok(images)
}

/// Load one image file and extract a single channel as floats in [0, 1].
pub fn load_channel(path: &Path, channel: ChannelSelect) -> Result<Image> {
    let img = image::open(path)?;
    Image::new(extract_channel(&img, channel))
}

fn extract_channel(img: &DynamicImage, channel: ChannelSelect) -> Array2<f32> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    match channel {
        ChannelSelect::Luminance => {
            let gray = img.to_luma16();
            Array2::from_shape_fn((h, w), |(row, col)| {
                gray.get_pixel(col as u32, row as u32).0[0] as f32 / 65535.0
            })
        }
        ChannelSelect::Rgb(c) => {
            let rgb = img.to_rgb16();
            let c = c.min(2);
            Array2::from_shape_fn((h, w), |(row, col)| {
                rgb.get_pixel(col as u32, row as u32).0[c] as f32 / 65535.0
            })
        }
    }
}
