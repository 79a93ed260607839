use crate::color_mapper::LinearColorMapper;
use crate::consts::PX_PER_PT;
use crate::palette::Color;
use crate::raster::Image;
use crate::viewport::{AxisRange, ViewportRange};

/// Font size in typographic points or CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSize {
    Pt(f32),
    Px(f32),
}

impl FontSize {
    pub fn to_px(self) -> f32 {
        match self {
            Self::Pt(pt) => pt * PX_PER_PT,
            Self::Px(px) => px,
        }
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pt(v) => write!(f, "{v}pt"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// Styling of one panel axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: Option<String>,
    pub major_label_text_font_size: FontSize,
    pub axis_label_text_font_size: FontSize,
    /// Tick label rotation in radians.
    pub major_label_orientation: f64,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            label: None,
            major_label_text_font_size: FontSize::Px(11.0),
            axis_label_text_font_size: FontSize::Px(13.0),
            major_label_orientation: 0.0,
        }
    }
}

/// Interactive tools attached to a panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Pan,
    BoxZoom,
    WheelZoom,
    Save,
    Reset,
    Hover,
}

impl Tool {
    /// Parse a comma-separated tool list such as `"pan,box_zoom,reset"`.
    /// Unknown names are skipped.
    pub fn parse_list(list: &str) -> Vec<Tool> {
        list.split(',')
            .filter_map(|name| match name.trim() {
                "pan" => Some(Tool::Pan),
                "box_zoom" => Some(Tool::BoxZoom),
                "wheel_zoom" => Some(Tool::WheelZoom),
                "save" => Some(Tool::Save),
                "reset" => Some(Tool::Reset),
                "hover" => Some(Tool::Hover),
                _ => None,
            })
            .collect()
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pan => write!(f, "pan"),
            Self::BoxZoom => write!(f, "box_zoom"),
            Self::WheelZoom => write!(f, "wheel_zoom"),
            Self::Save => write!(f, "save"),
            Self::Reset => write!(f, "reset"),
            Self::Hover => write!(f, "hover"),
        }
    }
}

/// How the panel is meant to be rasterized by a display backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputBackend {
    #[default]
    Canvas,
    Svg,
}

/// A scalar image stretched over the rectangle (x, y)..(x + dw, y + dh).
#[derive(Clone, Debug)]
pub struct ImageGlyph {
    pub image: Image,
    pub x: f64,
    pub y: f64,
    pub dw: f64,
    pub dh: f64,
    pub color_mapper: LinearColorMapper,
}

/// One bubble positioned on categorical axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub x: String,
    pub y: String,
    /// Diameter in screen pixels.
    pub size: f64,
    pub color: Color,
    /// (label, value) pairs revealed on hover.
    pub tooltip: Vec<(String, String)>,
}

#[derive(Clone, Debug)]
pub enum Glyph {
    Image(ImageGlyph),
    Bubbles(Vec<Marker>),
}

/// A single plot: ranges, axes, glyphs and display metadata.
#[derive(Clone, Debug)]
pub struct Panel {
    pub title: Option<String>,
    pub frame_width: Option<u32>,
    pub frame_height: u32,
    pub tools: Vec<Tool>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub output_backend: OutputBackend,
    pub glyphs: Vec<Glyph>,
}

impl Panel {
    /// Empty panel over the unit square.
    pub fn new(frame_height: u32) -> Self {
        Self {
            title: None,
            frame_width: None,
            frame_height,
            tools: Vec::new(),
            x_range: AxisRange::Linear(ViewportRange::unit()),
            y_range: AxisRange::Linear(ViewportRange::unit()),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            output_backend: OutputBackend::default(),
            glyphs: Vec::new(),
        }
    }

    /// Apply tick and axis-title font sizes to both axes.
    pub fn set_font_sizes(&mut self, tick: FontSize, title: FontSize) {
        for axis in [&mut self.x_axis, &mut self.y_axis] {
            axis.major_label_text_font_size = tick;
            axis.axis_label_text_font_size = title;
        }
    }

    /// Make this panel's x and y ranges the same objects as `other`'s.
    pub fn share_ranges_with(&mut self, other: &Panel) {
        self.x_range = other.x_range.clone();
        self.y_range = other.y_range.clone();
    }

    pub fn linear_x(&self) -> Option<&ViewportRange> {
        self.x_range.as_linear()
    }

    pub fn linear_y(&self) -> Option<&ViewportRange> {
        self.y_range.as_linear()
    }

    /// First image glyph, if any.
    pub fn image_glyph(&self) -> Option<&ImageGlyph> {
        self.glyphs.iter().find_map(|g| match g {
            Glyph::Image(img) => Some(img),
            Glyph::Bubbles(_) => None,
        })
    }

    /// All bubble markers across glyphs.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.glyphs.iter().flat_map(|g| match g {
            Glyph::Bubbles(markers) => markers.as_slice(),
            Glyph::Image(_) => &[][..],
        })
    }
}
