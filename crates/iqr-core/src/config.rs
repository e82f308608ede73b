//! Configuration for the iqr pipeline
//!
//! Every field has a default, so a config file only needs the values it
//! changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use iqr_gen::{OutputFormat, DEFAULT_SEED};
use iqr_plot::FigureConfig;
use iqr_stats::DEFAULT_K;

/// Config file picked up from the working directory by the demo
pub const CONFIG_FILE: &str = "iqr-demo.toml";

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Seed for every generated dataset
    pub seed: u64,
    /// Fence multiplier
    pub k: f64,
    /// Recipe names, one dataset each
    pub recipes: Vec<String>,
    /// Output format name passed to the generator
    pub output_format: String,
    /// Directory the demo writes figures to
    pub output_dir: PathBuf,
    /// Figure layout and density settings
    pub figure: FigureConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            k: DEFAULT_K,
            recipes: vec![
                "gaussian".to_string(),
                "extreme".to_string(),
                "gaussian+extreme".to_string(),
            ],
            output_format: OutputFormat::default().name().to_string(),
            output_dir: PathBuf::from("."),
            figure: FigureConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load a config file; `.json` files are read as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_toml(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.k.is_finite() || self.k < 0.0 {
            return Err(ConfigError::OutOfRange(format!(
                "k must be a finite value >= 0, got {}",
                self.k
            )));
        }

        if self.recipes.is_empty() {
            return Err(ConfigError::MissingField("recipes".to_string()));
        }

        let figure = &self.figure;
        if !figure.bandwidth.is_finite() || figure.bandwidth <= 0.0 {
            return Err(ConfigError::OutOfRange(format!(
                "figure.bandwidth must be positive, got {}",
                figure.bandwidth
            )));
        }

        for (name, value) in [
            ("figure.padding", figure.padding),
            ("figure.rug_offset", figure.rug_offset),
            ("figure.rug_jitter", figure.rug_jitter),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange(format!(
                    "{name} must be a finite value >= 0, got {value}"
                )));
            }
        }

        if figure.grid_points < 2 {
            return Err(ConfigError::OutOfRange(format!(
                "figure.grid_points must be at least 2, got {}",
                figure.grid_points
            )));
        }

        if figure.width == 0 || figure.height == 0 {
            return Err(ConfigError::OutOfRange(format!(
                "figure size must be positive, got {}x{}",
                figure.width, figure.height
            )));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Required field is missing or empty
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Config text could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// Config could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
