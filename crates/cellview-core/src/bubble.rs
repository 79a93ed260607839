use std::cmp::Ordering;
use std::f64::consts::FRAC_PI_2;

use tracing::{debug, warn};

use crate::color_mapper::LinearColorMapper;
use crate::config::BubbleConfig;
use crate::consts::{
    BRIGHTNESS_COLUMN, HOVER_COLUMNS, IMAGE_PANEL_TOOLS, PALETTE_STEPS, PERCENT_POSITIVE_COLUMN,
};
use crate::error::{CellviewError, Result};
use crate::palette::PaletteName;
use crate::panel::{Glyph, Marker, OutputBackend, Panel, Tool};
use crate::table::QuantTable;
use crate::viewport::{AxisRange, FactorRange};

/// Settings for one bubble summary plot.
#[derive(Clone, Debug)]
pub struct BubbleOptions {
    pub x_column: String,
    pub y_column: String,
    /// Explicit category order; observed values in natural order otherwise.
    pub x_factors: Option<Vec<String>>,
    pub y_factors: Option<Vec<String>>,
    pub size_column: String,
    pub color_column: String,
    pub width: u32,
    pub height: u32,
    /// Marker diameter range in screen pixels.
    pub size_range: (f64, f64),
    pub palette: PaletteName,
    /// Override the size scale bounds, e.g. to share a legend across plots.
    pub size_bounds: Option<(f64, f64)>,
    pub color_bounds: Option<(f64, f64)>,
    pub title: Option<String>,
}

impl BubbleOptions {
    pub fn new(x_column: &str, y_column: &str) -> Self {
        Self::with_config(x_column, y_column, &BubbleConfig::default())
    }

    pub fn with_config(x_column: &str, y_column: &str, config: &BubbleConfig) -> Self {
        Self {
            x_column: x_column.to_string(),
            y_column: y_column.to_string(),
            x_factors: None,
            y_factors: None,
            size_column: PERCENT_POSITIVE_COLUMN.to_string(),
            color_column: BRIGHTNESS_COLUMN.to_string(),
            width: config.width,
            height: config.height,
            size_range: config.size_range,
            palette: config.palette,
            size_bounds: None,
            color_bounds: None,
            title: None,
        }
    }
}

/// A bubble chart and the scale bounds it was drawn with.
#[derive(Clone, Debug)]
pub struct BubblePlot {
    pub panel: Panel,
    /// (min, max) of the size column.
    pub size_bounds: (f64, f64),
    /// (min, max) of the color column.
    pub color_bounds: (f64, f64),
}

/// Draw one marker per table row on categorical x/y axes.
///
/// Marker size encodes `size_column`, marker color encodes `color_column`,
/// and hover tooltips carry the well identity columns.
pub fn bubble_plot(table: &QuantTable, opts: &BubbleOptions) -> Result<BubblePlot> {
    let mut required: Vec<&str> = HOVER_COLUMNS.to_vec();
    required.extend([
        BRIGHTNESS_COLUMN,
        PERCENT_POSITIVE_COLUMN,
        opts.size_column.as_str(),
        opts.color_column.as_str(),
        opts.x_column.as_str(),
        opts.y_column.as_str(),
    ]);
    table.require(&required)?;

    let sizes = table.numeric(&opts.size_column)?;
    let colors = table.numeric(&opts.color_column)?;
    if table.n_rows() == 0 {
        return Err(CellviewError::EmptyTable);
    }

    let size_bounds = opts.size_bounds.unwrap_or_else(|| min_max(sizes));
    let color_bounds = opts.color_bounds.unwrap_or_else(|| min_max(colors));

    let x_values = &table.column(&opts.x_column)?.values;
    let y_values = &table.column(&opts.y_column)?.values;
    let x_range = FactorRange::new(
        opts.x_factors
            .clone()
            .unwrap_or_else(|| natural_factors(x_values)),
    );
    let y_range = FactorRange::new(
        opts.y_factors
            .clone()
            .unwrap_or_else(|| natural_factors(y_values)),
    );

    let hover = HOVER_COLUMNS
        .iter()
        .map(|name| table.column(name))
        .collect::<Result<Vec<_>>>()?;

    let mapper = LinearColorMapper::with_bounds(
        opts.palette.build(PALETTE_STEPS),
        color_bounds.0,
        color_bounds.1,
    );

    let mut markers = Vec::with_capacity(table.n_rows());
    let mut skipped = 0usize;
    for row in 0..table.n_rows() {
        let (x, y) = (&x_values[row], &y_values[row]);
        if x_range.index_of(x).is_none() || y_range.index_of(y).is_none() {
            skipped += 1;
            continue;
        }
        markers.push(Marker {
            x: x.clone(),
            y: y.clone(),
            size: scale_size(sizes[row], size_bounds, opts.size_range),
            color: mapper.color_at(colors[row], color_bounds.0, color_bounds.1),
            tooltip: hover
                .iter()
                .map(|col| (col.name.clone(), col.values[row].clone()))
                .collect(),
        });
    }
    if skipped > 0 {
        warn!(skipped, "Rows outside the given axis factors were not plotted");
    }

    let mut panel = Panel::new(opts.height);
    panel.title = opts.title.clone();
    panel.frame_width = Some(opts.width);
    panel.tools = Tool::parse_list(IMAGE_PANEL_TOOLS);
    panel.tools.push(Tool::Hover);
    panel.x_range = AxisRange::Factor(x_range);
    panel.y_range = AxisRange::Factor(y_range);
    panel.x_axis.label = Some(opts.x_column.clone());
    panel.y_axis.label = Some(opts.y_column.clone());
    panel.x_axis.major_label_orientation = FRAC_PI_2;
    panel.output_backend = OutputBackend::Svg;
    panel.glyphs.push(Glyph::Bubbles(markers));

    debug!(
        rows = table.n_rows(),
        ?size_bounds,
        ?color_bounds,
        "Bubble plot built"
    );
    Ok(BubblePlot {
        panel,
        size_bounds,
        color_bounds,
    })
}

/// Distinct values, numerically sorted if every value is a number,
/// lexically otherwise.
pub fn natural_factors(values: &[String]) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::new();
    for v in values {
        if !distinct.contains(v) {
            distinct.push(v.clone());
        }
    }

    let numeric: Option<Vec<f64>> = distinct.iter().map(|v| v.trim().parse().ok()).collect();
    match numeric {
        Some(keys) => {
            let mut keyed: Vec<(f64, String)> = keys.into_iter().zip(distinct).collect();
            keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
            keyed.into_iter().map(|(_, v)| v).collect()
        }
        None => {
            distinct.sort();
            distinct
        }
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Linearly map `value` from `bounds` onto `range`; a degenerate domain
/// maps to the middle of the range.
fn scale_size(value: f64, bounds: (f64, f64), range: (f64, f64)) -> f64 {
    let (lo, hi) = bounds;
    let (small, large) = range;
    let span = hi - lo;
    if !(span > 0.0) {
        return (small + large) / 2.0;
    }
    let t = ((value - lo) / span).clamp(0.0, 1.0);
    small + t * (large - small)
}
