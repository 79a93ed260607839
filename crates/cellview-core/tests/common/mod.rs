#![allow(dead_code)]

use std::path::Path;

use cellview_core::raster::Image;
use cellview_core::table::QuantTable;
use image::{ImageBuffer, Luma, Rgb};
use ndarray::Array2;

/// Quantification table with the full bubble schema and three wells.
pub const QUANT_CSV: &str = "\
Round,Plate,Well,Virus,Receptor,Dose,Total Brightness per Signal Area,Percent Positive
1,1,3,VSV,ACE2,10,0.5,20
1,1,12,VSV,ACE2,100,1.5,80
1,2,3,SARS,TMPRSS2,10,0.25,5
";

pub fn quant_table() -> QuantTable {
    QuantTable::from_csv_reader(QUANT_CSV.as_bytes()).expect("parse test table")
}

/// Image where each pixel holds its flat index scaled into [0, 1).
pub fn ramp_image(h: usize, w: usize) -> Image {
    let data = Array2::from_shape_fn((h, w), |(row, col)| (row * w + col) as f32 / (h * w) as f32);
    Image::new(data).expect("valid ramp")
}

pub fn constant_image(h: usize, w: usize, value: f32) -> Image {
    Image::new(Array2::from_elem((h, w), value)).expect("valid constant image")
}

/// 20x20 mask-like image: `background` everywhere except two separated
/// 4x4 squares set to `blob`.
pub fn two_blob_data(background: f32, blob: f32) -> Array2<f32> {
    let mut data = Array2::from_elem((20, 20), background);
    for row in 2..6 {
        for col in 2..6 {
            data[[row, col]] = blob;
        }
    }
    for row in 10..14 {
        for col in 10..14 {
            data[[row, col]] = blob;
        }
    }
    data
}

/// Write `data` (values in [0, 1]) as a 16-bit grayscale TIFF.
pub fn write_gray_tiff(path: &Path, data: &Array2<f32>) {
    let (h, w) = data.dim();
    let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_fn(w as u32, h as u32, |x, y| {
        Luma([(data[[y as usize, x as usize]] * 65535.0).round() as u16])
    });
    img.save(path).expect("write gray tiff");
}

/// Write `data` into one channel of a 16-bit RGB TIFF; other channels hold
/// the constant `other`.
pub fn write_rgb_tiff(path: &Path, data: &Array2<f32>, channel: usize, other: u16) {
    let (h, w) = data.dim();
    let img = ImageBuffer::<Rgb<u16>, Vec<u16>>::from_fn(w as u32, h as u32, |x, y| {
        let mut px = [other; 3];
        px[channel] = (data[[y as usize, x as usize]] * 65535.0).round() as u16;
        Rgb(px)
    });
    img.save(path).expect("write rgb tiff");
}
