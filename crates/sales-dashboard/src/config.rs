//! Configuration for the sales dashboard
//!
//! Everything is optional: a missing file, section or key falls back to the
//! compiled-in defaults from the `shared` crate.

use anyhow::{Context, Result};
use sales_analytics::{Palette, Palettes};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// File-based Configuration (dashboard.toml)
// =============================================================================

/// Configuration loaded from dashboard.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub source: SourceConfig,
    pub palette: PaletteConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Local path or http(s) URL of the sales CSV
    pub location: Option<String>,
}

/// Chart palettes, each a list of `#RRGGBB` colors
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub product: Option<Palette>,
    pub payment: Option<Palette>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where `export` writes its CSV files
    pub dir: Option<PathBuf>,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| {
            "Check for:\n\
             - Invalid TOML syntax (missing quotes, brackets, etc.)\n\
             - Palette colors not written as \"#RRGGBB\"\n\
             - Empty palettes"
        })
    }

    /// Configured palettes, defaults where none are given
    pub fn palettes(&self) -> Palettes {
        let defaults = Palettes::default();
        Palettes {
            product: self.palette.product.clone().unwrap_or(defaults.product),
            payment: self.palette.payment.clone().unwrap_or(defaults.payment),
        }
    }
}
