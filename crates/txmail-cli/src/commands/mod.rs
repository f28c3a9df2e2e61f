//! Subcommands and shared helpers.

pub mod batch;
pub mod config;
pub mod output;
pub mod parse;
pub mod templates;

use std::path::{Path, PathBuf};

use tracing::debug;

use txmail_core::TxmailConfig;

/// Per-user config file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("txmail")
        .join("config.json")
}

/// Load the explicit config, else the per-user file if present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<TxmailConfig> {
    if let Some(path) = config_path {
        return Ok(TxmailConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(TxmailConfig::from_file(&default_path)?)
    } else {
        Ok(TxmailConfig::default())
    }
}
