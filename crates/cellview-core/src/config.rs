use serde::{Deserialize, Serialize};

use crate::consts::{
    AXIS_LABEL_FONT_PT, DEFAULT_BUBBLE_HEIGHT, DEFAULT_BUBBLE_SIZE_MAX, DEFAULT_BUBBLE_SIZE_MIN,
    DEFAULT_BUBBLE_WIDTH, DEFAULT_EXPORT_MAX_CELLS, DEFAULT_EXPORT_PANEL_WIDTH,
    DEFAULT_FRAME_HEIGHT, DEFAULT_SEGMENT_MIN_AREA, TICK_LABEL_FONT_PT,
};
use crate::palette::PaletteName;

/// Top-level settings for every viewer in the crate.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub renderer: RendererConfig,
    #[serde(default)]
    pub styling: StylingConfig,
    #[serde(default)]
    pub linking: LinkingConfig,
    #[serde(default)]
    pub bubble: BubbleConfig,
    #[serde(default)]
    pub segmentation: SegmentationConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Panel frame height in screen pixels.
    pub frame_height: u32,
    /// Palette used when the caller gives no color mapper.
    pub default_palette: PaletteName,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            frame_height: DEFAULT_FRAME_HEIGHT,
            default_palette: PaletteName::Gray,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StylingConfig {
    pub tick_label_font_pt: f32,
    pub axis_label_font_pt: f32,
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            tick_label_font_pt: TICK_LABEL_FONT_PT,
            axis_label_font_pt: AXIS_LABEL_FONT_PT,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinkingConfig {
    /// Reject image pairs whose shapes differ. Off by default.
    pub require_matching_shapes: bool,
}

impl Default for LinkingConfig {
    fn default() -> Self {
        Self {
            require_matching_shapes: false,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BubbleConfig {
    pub width: u32,
    pub height: u32,
    /// Marker diameter range in screen pixels, (smallest, largest).
    pub size_range: (f64, f64),
    pub palette: PaletteName,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BUBBLE_WIDTH,
            height: DEFAULT_BUBBLE_HEIGHT,
            size_range: (DEFAULT_BUBBLE_SIZE_MIN, DEFAULT_BUBBLE_SIZE_MAX),
            palette: PaletteName::Viridis,
        }
    }
}

/// Method used to split foreground from background.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ThresholdMethod {
    /// Otsu's method: maximizes between-class variance of the histogram.
    #[default]
    Otsu,
    /// Threshold = mean + sigma_multiplier * stddev.
    MeanPlusSigma(f32),
    /// User-specified threshold in image units.
    Fixed(f32),
}

impl std::fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Otsu => write!(f, "Otsu"),
            Self::MeanPlusSigma(k) => write!(f, "Mean + {k} sigma"),
            Self::Fixed(t) => write!(f, "Fixed ({t})"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentationConfig {
    #[serde(default)]
    pub threshold_method: ThresholdMethod,
    /// Components smaller than this many pixels are discarded.
    #[serde(default = "default_min_area")]
    pub min_area: usize,
    /// Apply a 3x3 morphological opening before labeling.
    #[serde(default = "default_open")]
    pub open_mask: bool,
    /// Which side of the threshold counts as cells in brightfield images.
    #[serde(default = "default_brightfield_polarity")]
    pub brightfield_polarity: Polarity,
    /// Which side of the threshold counts as signal in fluorescence images.
    #[serde(default)]
    pub signal_polarity: Polarity,
}

/// Foreground side of a threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// Pixels brighter than the threshold.
    #[default]
    Above,
    /// Pixels at or below the threshold.
    Below,
}

fn default_min_area() -> usize {
    DEFAULT_SEGMENT_MIN_AREA
}
fn default_open() -> bool {
    true
}
fn default_brightfield_polarity() -> Polarity {
    Polarity::Below
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            threshold_method: ThresholdMethod::default(),
            min_area: DEFAULT_SEGMENT_MIN_AREA,
            open_mask: true,
            brightfield_polarity: Polarity::Below,
            signal_polarity: Polarity::Above,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Upper bound on raster cells drawn per image axis.
    pub max_cells: usize,
    /// Width of one exported panel in pixels.
    pub panel_width: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            max_cells: DEFAULT_EXPORT_MAX_CELLS,
            panel_width: DEFAULT_EXPORT_PANEL_WIDTH,
        }
    }
}
