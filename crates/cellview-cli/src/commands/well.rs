use std::path::PathBuf;

use anyhow::{Context, Result};
use cellview_core::discovery::WellId;
use cellview_core::export::save_svg;
use cellview_core::segmentation::ThresholdSegmenter;
use cellview_core::well::view_well_reported;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use super::load_config;
use crate::summary::print_well_summary;

#[derive(Args)]
pub struct WellArgs {
    /// Experiment root containing round_<R>/plate_<P>/XY<WW> folders
    pub root: PathBuf,

    /// Imaging round
    #[arg(long)]
    pub round: u32,

    /// Plate number
    #[arg(long)]
    pub plate: u32,

    /// Well number
    #[arg(long)]
    pub well: u32,

    /// Minimum region area in pixels (overrides config)
    #[arg(long)]
    pub min_area: Option<usize>,

    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory for brightfield.svg and signal.svg
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

pub fn run(args: &WellArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(min_area) = args.min_area {
        config.segmentation.min_area = min_area;
    }

    let id = WellId {
        round: args.round,
        plate: args.plate,
        well: args.well,
    };
    let segmenter = ThresholdSegmenter::new(config.segmentation.clone());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    let view = view_well_reported(&args.root, id, &segmenter, &config, |stage| {
        pb.set_message(stage.to_string());
        pb.tick();
    })
    .with_context(|| format!("Failed to view well {id}"))?;
    pb.finish_with_message("Done");

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let bf_path = args.output.join("brightfield.svg");
    let sig_path = args.output.join("signal.svg");
    save_svg(&view.brightfield, &bf_path, &config.export)?;
    save_svg(&view.signal, &sig_path, &config.export)?;

    print_well_summary(id, &view, &bf_path, &sig_path);
    Ok(())
}
