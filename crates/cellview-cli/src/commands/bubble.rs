use std::path::PathBuf;

use anyhow::{Context, Result};
use cellview_core::bubble::{bubble_plot, BubbleOptions};
use cellview_core::export::save_svg;
use cellview_core::layout::GridLayout;
use cellview_core::table::QuantTable;
use clap::Args;

use super::{load_config, split_list};
use crate::summary::print_bubble_summary;

#[derive(Args)]
pub struct BubbleArgs {
    /// Quantification table (CSV with a header row)
    pub table: PathBuf,

    /// Column for the categorical x axis
    #[arg(long)]
    pub x: String,

    /// Column for the categorical y axis
    #[arg(long)]
    pub y: String,

    /// Comma-separated x axis categories, in display order
    #[arg(long)]
    pub x_factors: Option<String>,

    /// Comma-separated y axis categories, in display order
    #[arg(long)]
    pub y_factors: Option<String>,

    /// Plot title
    #[arg(long)]
    pub title: Option<String>,

    /// Plot width in pixels (overrides config)
    #[arg(long)]
    pub width: Option<u32>,

    /// Plot height in pixels (overrides config)
    #[arg(long)]
    pub height: Option<u32>,

    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output SVG path
    #[arg(short, long, default_value = "bubble.svg")]
    pub output: PathBuf,
}

pub fn run(args: &BubbleArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let table = QuantTable::from_csv_path(&args.table)
        .with_context(|| format!("Failed to read table {}", args.table.display()))?;

    let mut opts = BubbleOptions::with_config(&args.x, &args.y, &config.bubble);
    opts.x_factors = args.x_factors.as_deref().map(split_list);
    opts.y_factors = args.y_factors.as_deref().map(split_list);
    opts.title = args.title.clone();
    if let Some(w) = args.width {
        opts.width = w;
    }
    if let Some(h) = args.height {
        opts.height = h;
    }

    let plot = bubble_plot(&table, &opts)?;
    let size_bounds = plot.size_bounds;
    let color_bounds = plot.color_bounds;
    let layout = GridLayout::new(vec![plot.panel], 1);
    save_svg(&layout, &args.output, &config.export)?;

    print_bubble_summary(&opts, table.n_rows(), size_bounds, color_bounds, &args.output);
    Ok(())
}
