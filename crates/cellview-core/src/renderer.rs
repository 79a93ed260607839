use ndarray::Array2;
use tracing::debug;

use crate::color_mapper::LinearColorMapper;
use crate::config::RendererConfig;
use crate::consts::{IMAGE_PANEL_TOOLS, PALETTE_STEPS};
use crate::error::Result;
use crate::panel::{Glyph, ImageGlyph, Panel, Tool};
use crate::raster::Image;

/// Turns a scalar image into a pannable, zoomable panel.
///
/// The image always fills the unit square: anchored at (0, 0) with
/// width 1 and height 1, whatever its pixel shape.
#[derive(Clone, Debug, Default)]
pub struct ScalarImageRenderer {
    config: RendererConfig,
}

impl ScalarImageRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, image: &Image, mapper: Option<LinearColorMapper>) -> Panel {
        let color_mapper = mapper.unwrap_or_else(|| {
            LinearColorMapper::new(self.config.default_palette.build(PALETTE_STEPS))
        });

        let mut panel = Panel::new(self.config.frame_height);
        panel.tools = Tool::parse_list(IMAGE_PANEL_TOOLS);
        panel.glyphs.push(Glyph::Image(ImageGlyph {
            image: image.clone(),
            x: 0.0,
            y: 0.0,
            dw: 1.0,
            dh: 1.0,
            color_mapper,
        }));

        debug!(
            height = image.height(),
            width = image.width(),
            "Image panel built"
        );
        panel
    }
}

/// Render `image` with the default renderer settings.
pub fn imshow(image: &Image, mapper: Option<LinearColorMapper>) -> Panel {
    ScalarImageRenderer::default().render(image, mapper)
}

/// Validate a raw array and render it; malformed input yields `InvalidImage`.
pub fn imshow_array(data: Array2<f32>, mapper: Option<LinearColorMapper>) -> Result<Panel> {
    let image = Image::new(data)?;
    Ok(imshow(&image, mapper))
}
