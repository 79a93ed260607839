use std::f64::consts::{FRAC_PI_2, PI};
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::color_mapper::LinearColorMapper;
use crate::config::ExportConfig;
use crate::error::{CellviewError, Result};
use crate::layout::GridLayout;
use crate::panel::{Axis, FontSize, Glyph, ImageGlyph, Marker, Panel};
use crate::raster::Image;
use crate::viewport::{AxisRange, FactorRange, Span};

/// Space around each panel frame for ticks, axis titles and caption.
const FRAME_PADDING: u32 = 110;

type SvgArea<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Render a layout to an SVG document, each panel at its current viewport.
pub fn render_svg(layout: &GridLayout, config: &ExportConfig) -> Result<String> {
    let (cell_w, cell_h) = cell_size(layout, config);
    let size = (
        cell_w * layout.ncols() as u32,
        cell_h * layout.nrows().max(1) as u32,
    );

    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;
        let cells = root.split_evenly((layout.nrows().max(1), layout.ncols()));
        for (panel, area) in layout.panels().iter().zip(cells.iter()) {
            draw_panel(area, panel, config)?;
        }
        root.present().map_err(render_err)?;
    }
    Ok(buf)
}

/// Write a layout as an SVG file.
pub fn save_svg(layout: &GridLayout, path: &Path, config: &ExportConfig) -> Result<()> {
    let svg = render_svg(layout, config)?;
    std::fs::write(path, svg)?;
    info!(output = %path.display(), panels = layout.len(), "SVG saved");
    Ok(())
}

/// Save the color-mapped pixels of `image` as an 8-bit RGB PNG, one output
/// pixel per image pixel. Row 0 ends up at the bottom, as in the panels.
pub fn save_colormapped_png(image: &Image, mapper: &LinearColorMapper, path: &Path) -> Result<()> {
    let colors = mapper.colorize(image);
    let (h, w) = colors.dim();
    let img = RgbImage::from_fn(w as u32, h as u32, |x, y| {
        Rgb(colors[[h - 1 - y as usize, x as usize]])
    });
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn cell_size(layout: &GridLayout, config: &ExportConfig) -> (u32, u32) {
    let frame_w = layout
        .panels()
        .iter()
        .map(|p| p.frame_width.unwrap_or(config.panel_width))
        .max()
        .unwrap_or(config.panel_width);
    let frame_h = layout
        .panels()
        .iter()
        .map(|p| p.frame_height)
        .max()
        .unwrap_or(0);
    (frame_w + FRAME_PADDING, frame_h + FRAME_PADDING)
}

fn draw_panel(area: &SvgArea, panel: &Panel, config: &ExportConfig) -> Result<()> {
    match (&panel.x_range, &panel.y_range) {
        (AxisRange::Linear(x), AxisRange::Linear(y)) => {
            draw_linear_panel(area, panel, x.get(), y.get(), config)
        }
        (AxisRange::Factor(x), AxisRange::Factor(y)) => draw_factor_panel(area, panel, x, y),
        _ => Err(CellviewError::Render(
            "panels mixing linear and categorical axes are not supported".into(),
        )),
    }
}

fn draw_linear_panel(
    area: &SvgArea,
    panel: &Panel,
    x: Span,
    y: Span,
    config: &ExportConfig,
) -> Result<()> {
    let (x0, x1) = ordered(x);
    let (y0, y1) = ordered(y);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(10)
        .x_label_area_size(label_area(&panel.x_axis))
        .y_label_area_size(label_area(&panel.y_axis));
    if let Some(ref title) = panel.title {
        builder.caption(title, font(FontSize::Px(16.0)));
    }
    let mut chart = builder
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(render_err)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh()
        .x_label_style(tick_font(&panel.x_axis))
        .y_label_style(tick_font(&panel.y_axis))
        .axis_desc_style(font(panel.x_axis.axis_label_text_font_size));
    if let Some(ref label) = panel.x_axis.label {
        mesh.x_desc(label.as_str());
    }
    if let Some(ref label) = panel.y_axis.label {
        mesh.y_desc(label.as_str());
    }
    mesh.draw().map_err(render_err)?;

    for glyph in &panel.glyphs {
        if let Glyph::Image(img) = glyph {
            let cells = image_cells(img, config.max_cells, (x0, x1), (y0, y1));
            chart.draw_series(cells).map_err(render_err)?;
        }
    }
    Ok(())
}

/// Downsampled pixel rectangles of an image glyph that intersect the view.
fn image_cells(
    glyph: &ImageGlyph,
    max_cells: usize,
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
) -> Vec<Rectangle<(f64, f64)>> {
    let colors = glyph.color_mapper.colorize(&glyph.image);
    let (h, w) = colors.dim();
    let nx = w.min(max_cells.max(1));
    let ny = h.min(max_cells.max(1));
    let cw = glyph.dw / nx as f64;
    let ch = glyph.dh / ny as f64;

    let mut rects = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        let top = glyph.y + j as f64 * ch;
        if top + ch < y0 || top > y1 {
            continue;
        }
        let row = j * h / ny;
        for i in 0..nx {
            let left = glyph.x + i as f64 * cw;
            if left + cw < x0 || left > x1 {
                continue;
            }
            let [r, g, b] = colors[[row, i * w / nx]];
            rects.push(Rectangle::new(
                [(left, top), (left + cw, top + ch)],
                RGBColor(r, g, b).filled(),
            ));
        }
    }
    rects
}

fn draw_factor_panel(area: &SvgArea, panel: &Panel, x: &FactorRange, y: &FactorRange) -> Result<()> {
    let nx = x.len().max(1) as i32;
    let ny = y.len().max(1) as i32;

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(10)
        .x_label_area_size(label_area(&panel.x_axis))
        .y_label_area_size(label_area(&panel.y_axis));
    if let Some(ref title) = panel.title {
        builder.caption(title, font(FontSize::Px(16.0)));
    }
    let mut chart = builder
        .build_cartesian_2d((0..nx).into_segmented(), (0..ny).into_segmented())
        .map_err(render_err)?;

    let x_fmt = |v: &SegmentValue<i32>| factor_label(x, v);
    let y_fmt = |v: &SegmentValue<i32>| factor_label(y, v);
    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh()
        .x_labels(x.len() + 1)
        .y_labels(y.len() + 1)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .x_label_style(tick_font(&panel.x_axis))
        .y_label_style(tick_font(&panel.y_axis))
        .axis_desc_style(font(panel.x_axis.axis_label_text_font_size));
    if let Some(ref label) = panel.x_axis.label {
        mesh.x_desc(label.as_str());
    }
    if let Some(ref label) = panel.y_axis.label {
        mesh.y_desc(label.as_str());
    }
    mesh.draw().map_err(render_err)?;

    let bubbles: Vec<Circle<(SegmentValue<i32>, SegmentValue<i32>), i32>> = panel
        .markers()
        .filter_map(|m| bubble(m, x, y))
        .collect();
    chart.draw_series(bubbles).map_err(render_err)?;
    Ok(())
}

fn bubble(
    marker: &Marker,
    x: &FactorRange,
    y: &FactorRange,
) -> Option<Circle<(SegmentValue<i32>, SegmentValue<i32>), i32>> {
    let xi = x.index_of(&marker.x)? as i32;
    let yi = y.index_of(&marker.y)? as i32;
    let c = marker.color;
    Some(Circle::new(
        (SegmentValue::CenterOf(xi), SegmentValue::CenterOf(yi)),
        (marker.size / 2.0).round().max(1.0) as i32,
        RGBColor(c.r, c.g, c.b).mix(0.7).filled(),
    ))
}

fn factor_label(range: &FactorRange, v: &SegmentValue<i32>) -> String {
    match v {
        SegmentValue::CenterOf(i) => range.factors.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

fn ordered(span: Span) -> (f64, f64) {
    let (lo, hi) = if span.start <= span.end {
        (span.start, span.end)
    } else {
        (span.end, span.start)
    };
    if hi - lo > 0.0 {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

fn font(size: FontSize) -> FontDesc<'static> {
    FontFamily::SansSerif.into_font().resize(size.to_px() as f64)
}

fn tick_font(axis: &Axis) -> FontDesc<'static> {
    let f = font(axis.major_label_text_font_size);
    match rotation(axis.major_label_orientation) {
        Some(t) => f.transform(t),
        None => f,
    }
}

/// Nearest quarter-turn rotation for tick labels, if any.
fn rotation(radians: f64) -> Option<FontTransform> {
    let quarter = (radians.rem_euclid(2.0 * PI) / FRAC_PI_2).round() as i64 % 4;
    match quarter {
        1 => Some(FontTransform::Rotate90),
        2 => Some(FontTransform::Rotate180),
        3 => Some(FontTransform::Rotate270),
        _ => None,
    }
}

/// Label area grows with tick font size and room for rotated labels.
fn label_area(axis: &Axis) -> u32 {
    let tick = axis.major_label_text_font_size.to_px();
    let title = axis.axis_label_text_font_size.to_px();
    let ticks = if rotation(axis.major_label_orientation).is_some() {
        tick * 4.0
    } else {
        tick * 2.0
    };
    (ticks + title + 8.0).round() as u32
}

fn render_err<E: std::fmt::Display>(e: E) -> CellviewError {
    CellviewError::Render(e.to_string())
}
