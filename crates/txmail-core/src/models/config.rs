//! Configuration structures for the parsing pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::template::TemplateDef;
use crate::error::{Result, TxmailError};

/// Default length of the input excerpt kept on each record.
pub const DEFAULT_EXCERPT_LEN: usize = 50;

/// Main configuration for txmail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxmailConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// User templates, checked before the built-in ones.
    pub templates: Vec<TemplateDef>,
}

/// Extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of characters of the body copied into `raw_excerpt`.
    pub excerpt_len: usize,

    /// Append the built-in institution templates after user templates.
    pub include_builtin_templates: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            excerpt_len: DEFAULT_EXCERPT_LEN,
            include_builtin_templates: true,
        }
    }
}

impl TxmailConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| TxmailError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| TxmailError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
