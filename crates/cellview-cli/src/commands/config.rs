use std::path::PathBuf;

use anyhow::{Context, Result};
use cellview_core::config::ViewerConfig;
use clap::Args;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the viewer config here instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Emit the default ViewerConfig as TOML, ready to edit and pass to `--config`.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let rendered = toml::to_string_pretty(&ViewerConfig::default())
        .context("Failed to serialize viewer config")?;

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Viewer config written to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
