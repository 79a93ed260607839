/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of steps in the default palettes.
pub const PALETTE_STEPS: usize = 256;

/// Fixed frame height of an image panel, in screen pixels.
pub const DEFAULT_FRAME_HEIGHT: u32 = 400;

/// Tick label font size applied to linked image pairs.
pub const TICK_LABEL_FONT_PT: f32 = 12.0;

/// Axis title font size applied to linked image pairs.
pub const AXIS_LABEL_FONT_PT: f32 = 18.0;

/// Default bubble plot size in screen pixels.
pub const DEFAULT_BUBBLE_WIDTH: u32 = 500;
pub const DEFAULT_BUBBLE_HEIGHT: u32 = 400;

/// Default marker diameter range for bubble plots, in screen pixels.
pub const DEFAULT_BUBBLE_SIZE_MIN: f64 = 5.0;
pub const DEFAULT_BUBBLE_SIZE_MAX: f64 = 25.0;

/// Identity columns shown in bubble plot hover tooltips, in display order.
pub const HOVER_COLUMNS: [&str; 6] = ["Round", "Plate", "Well", "Virus", "Receptor", "Dose"];

/// Quantification column encoded as marker color by default.
pub const BRIGHTNESS_COLUMN: &str = "Total Brightness per Signal Area";

/// Quantification column encoded as marker size by default.
pub const PERCENT_POSITIVE_COLUMN: &str = "Percent Positive";

/// Tools enabled on every image panel.
pub const IMAGE_PANEL_TOOLS: &str = "pan,box_zoom,wheel_zoom,save,reset";

/// CSS pixels per typographic point.
pub const PX_PER_PT: f32 = 4.0 / 3.0;

/// Default cap on raster cells drawn per image axis during SVG export.
pub const DEFAULT_EXPORT_MAX_CELLS: usize = 128;

/// Default on-page width of one exported panel, in pixels.
pub const DEFAULT_EXPORT_PANEL_WIDTH: u32 = 480;

/// Minimum connected component area (pixels) kept by the default segmenter.
pub const DEFAULT_SEGMENT_MIN_AREA: usize = 16;

/// Number of histogram bins for Otsu's thresholding.
pub const OTSU_HISTOGRAM_BINS: usize = 256;
