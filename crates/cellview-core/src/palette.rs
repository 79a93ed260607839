use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Linear interpolation between two colors, `t` in [0, 1].
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Ordered color sequence consumed by a color mapper.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from explicit colors. Returns `None` if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn first(&self) -> Color {
        self.colors[0]
    }

    pub fn last(&self) -> Color {
        self.colors[self.colors.len() - 1]
    }
}

/// Viridis sampled at nine evenly spaced stops.
const VIRIDIS_ANCHORS: [Color; 9] = [
    Color::new(0x44, 0x01, 0x54),
    Color::new(0x47, 0x2c, 0x7a),
    Color::new(0x3b, 0x51, 0x8b),
    Color::new(0x2c, 0x71, 0x8e),
    Color::new(0x21, 0x90, 0x8d),
    Color::new(0x27, 0xad, 0x81),
    Color::new(0x5c, 0xc8, 0x63),
    Color::new(0xaa, 0xdc, 0x32),
    Color::new(0xfd, 0xe7, 0x25),
];

/// `n` evenly spaced grays from black to white (`n` is raised to at least 1).
pub fn gray(n: usize) -> Palette {
    let n = n.max(1);
    let colors = (0..n)
        .map(|i| {
            let v = if n == 1 {
                0
            } else {
                ((i * 255) as f32 / (n - 1) as f32).round() as u8
            };
            Color::new(v, v, v)
        })
        .collect();
    Palette { colors }
}

/// `n` colors of the viridis map, interpolated between its anchor stops.
pub fn viridis(n: usize) -> Palette {
    Palette {
        colors: interpolate(&VIRIDIS_ANCHORS, n.max(1)),
    }
}

fn interpolate(anchors: &[Color], n: usize) -> Vec<Color> {
    if n == 1 {
        return vec![anchors[0]];
    }
    let segments = (anchors.len() - 1) as f32;
    (0..n)
        .map(|i| {
            let pos = i as f32 / (n - 1) as f32 * segments;
            let seg = (pos.floor() as usize).min(anchors.len() - 2);
            anchors[seg].lerp(anchors[seg + 1], pos - seg as f32)
        })
        .collect()
}

/// Named palettes selectable from config files and the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    #[default]
    Gray,
    Viridis,
}

impl PaletteName {
    pub fn build(self, n: usize) -> Palette {
        match self {
            Self::Gray => gray(n),
            Self::Viridis => viridis(n),
        }
    }
}

impl std::fmt::Display for PaletteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gray => write!(f, "Gray"),
            Self::Viridis => write!(f, "Viridis"),
        }
    }
}
