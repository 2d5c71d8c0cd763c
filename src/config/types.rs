use serde::{Deserialize, Serialize};

use crate::cli::CompressionLevel;

/// PNG compression level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

impl CompressConfig {
    /// Convert to the CLI compression level, rejecting out-of-range values.
    pub fn to_level(&self) -> Result<CompressionLevel, String> {
        match self {
            CompressConfig::Level(n) => CompressionLevel::from_level(*n),
            CompressConfig::Max(s) => s.parse(),
        }
    }
}

/// Quadsheet configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadsheetConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Source image to split
    pub input: Option<String>,
    /// Existing directory the sprite strip is written into
    pub output_dir: String,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for QuadsheetConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: None,
            output_dir: ".".to_string(),
            compress: None,
        }
    }
}
