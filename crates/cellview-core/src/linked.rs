use tracing::debug;

use crate::color_mapper::LinearColorMapper;
use crate::config::ViewerConfig;
use crate::error::{CellviewError, Result};
use crate::layout::GridLayout;
use crate::panel::{FontSize, OutputBackend};
use crate::raster::Image;
use crate::renderer::ScalarImageRenderer;

/// Shows two images side by side with a shared pan/zoom state.
#[derive(Clone, Debug, Default)]
pub struct LinkedImagePairViewer {
    config: ViewerConfig,
}

impl LinkedImagePairViewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    /// Render `left` and `right` into a 2-column grid.
    ///
    /// The right panel's x and y ranges are the left panel's range objects,
    /// so panning or zooming either panel moves both. Both panels get
    /// identical font sizes and the SVG output backend.
    pub fn show(
        &self,
        left: &Image,
        right: &Image,
        mappers: [Option<LinearColorMapper>; 2],
    ) -> Result<GridLayout> {
        if self.config.linking.require_matching_shapes && left.shape() != right.shape() {
            return Err(CellviewError::ShapeMismatch {
                left: left.shape(),
                right: right.shape(),
            });
        }

        let renderer = ScalarImageRenderer::new(self.config.renderer.clone());
        let [left_mapper, right_mapper] = mappers;
        let mut p1 = renderer.render(left, left_mapper);
        let mut p2 = renderer.render(right, right_mapper);

        let tick = FontSize::Pt(self.config.styling.tick_label_font_pt);
        let title = FontSize::Pt(self.config.styling.axis_label_font_pt);
        p1.set_font_sizes(tick, title);
        p2.set_font_sizes(tick, title);

        p2.share_ranges_with(&p1);

        p1.output_backend = OutputBackend::Svg;
        p2.output_backend = OutputBackend::Svg;

        debug!(
            left = ?left.shape(),
            right = ?right.shape(),
            "Linked image pair built"
        );
        Ok(GridLayout::new(vec![p1, p2], 2))
    }
}

/// Convenience wrapper over [`LinkedImagePairViewer`] with default settings.
pub fn show_two_ims(
    left: &Image,
    right: &Image,
    mappers: [Option<LinearColorMapper>; 2],
) -> Result<GridLayout> {
    LinkedImagePairViewer::default().show(left, right, mappers)
}
