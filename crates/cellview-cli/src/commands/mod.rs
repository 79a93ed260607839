pub mod bubble;
pub mod config;
pub mod pair;
pub mod well;

use std::path::Path;

use anyhow::{Context, Result};
use cellview_core::config::ViewerConfig;
use tracing::info;

/// Read a TOML viewer config, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = toml::from_str(&contents).context("Invalid viewer config")?;
    info!(path = %path.display(), "Viewer config loaded");
    Ok(config)
}

/// Split a comma-separated CLI list, dropping empty items.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
