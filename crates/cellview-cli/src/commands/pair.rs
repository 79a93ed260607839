use std::path::PathBuf;

use anyhow::{Context, Result};
use cellview_core::color_mapper::LinearColorMapper;
use cellview_core::consts::PALETTE_STEPS;
use cellview_core::discovery::{load_channel, ChannelSelect};
use cellview_core::export::save_svg;
use cellview_core::linked::LinkedImagePairViewer;
use cellview_core::palette::PaletteName;
use clap::{Args, ValueEnum};

use super::load_config;
use crate::summary::print_layout_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum PaletteArg {
    Gray,
    Viridis,
}

impl From<PaletteArg> for PaletteName {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Gray => PaletteName::Gray,
            PaletteArg::Viridis => PaletteName::Viridis,
        }
    }
}

#[derive(Args)]
pub struct PairArgs {
    /// Left image
    pub left: PathBuf,

    /// Right image
    pub right: PathBuf,

    /// Palette for the left image
    #[arg(long, value_enum, default_value = "gray")]
    pub left_palette: PaletteArg,

    /// Palette for the right image
    #[arg(long, value_enum, default_value = "gray")]
    pub right_palette: PaletteArg,

    /// Reject images of different shapes
    #[arg(long)]
    pub require_matching_shapes: bool,

    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output SVG path
    #[arg(short, long, default_value = "pair.svg")]
    pub output: PathBuf,
}

pub fn run(args: &PairArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if args.require_matching_shapes {
        config.linking.require_matching_shapes = true;
    }

    let left = load_channel(&args.left, ChannelSelect::Luminance)
        .with_context(|| format!("Failed to load {}", args.left.display()))?;
    let right = load_channel(&args.right, ChannelSelect::Luminance)
        .with_context(|| format!("Failed to load {}", args.right.display()))?;

    let mappers = [args.left_palette, args.right_palette]
        .map(|p| Some(LinearColorMapper::new(PaletteName::from(p).build(PALETTE_STEPS))));
    let layout = LinkedImagePairViewer::new(config.clone()).show(&left, &right, mappers)?;

    save_svg(&layout, &args.output, &config.export)?;
    print_layout_summary("Linked pair", &layout, &args.output);
    Ok(())
}
