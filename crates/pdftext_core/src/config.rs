//! Configuration file handling for pdftext.
//!
//! Loads settings from `pdftext.config.toml` with the following search order:
//! 1. Current directory
//! 2. ~/.config/pdftext/pdftext.config.toml (Linux/macOS)
//! 3. ~/.pdftext/pdftext.config.toml

use std::path::PathBuf;
use std::fs;
use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};
use extract::StrategyKind;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PdfTextConfig {
    pub extract: ExtractConfig,
}

/// Extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// File to read when no path is given on the command line.
    pub default_path: PathBuf,
    /// Strategies to try, in order. Empty means the built-in order.
    pub strategies: Vec<StrategyKind>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from("public/Blogabout/Benou.pdf"),
            strategies: StrategyKind::DEFAULT_ORDER.to_vec(),
        }
    }
}

impl ExtractConfig {
    /// Effective strategy order.
    pub fn strategy_order(&self) -> Vec<StrategyKind> {
        if self.strategies.is_empty() {
            StrategyKind::DEFAULT_ORDER.to_vec()
        } else {
            self.strategies.clone()
        }
    }
}

impl PdfTextConfig {
    /// Config file name.
    pub const FILENAME: &'static str = "pdftext.config.toml";

    /// Load configuration from file, searching standard locations.
    /// Returns default config if no file found.
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::find_config_file() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: PdfTextConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Find config file in standard locations.
    pub fn find_config_file() -> Option<PathBuf> {
        let current = PathBuf::from(Self::FILENAME);
        if current.exists() {
            return Some(current);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("pdftext").join(Self::FILENAME);
            if path.exists() {
                return Some(path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".pdftext").join(Self::FILENAME);
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Get the default config file path for the current platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pdftext").join(Self::FILENAME))
    }

    /// Generate a default config file with comments.
    pub fn generate_default_config() -> String {
        r#"# pdftext configuration
# Place this file at:
#   - ./pdftext.config.toml (current directory)
#   - ~/.config/pdftext/pdftext.config.toml (Linux/macOS)
#   - ~/.pdftext/pdftext.config.toml

[extract]
# File to read when no path argument is given
default_path = "public/Blogabout/Benou.pdf"

# Strategies to try, in order. A library strategy compiled out of this
# build is skipped; "byte-scan" is always available.
strategies = ["pdf-extract", "lopdf", "byte-scan"]
"#.to_string()
    }
}
