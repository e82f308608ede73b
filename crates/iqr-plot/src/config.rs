//! Figure configuration

use serde::{Deserialize, Serialize};

use iqr_stats::{DEFAULT_BANDWIDTH, DEFAULT_GRID_POINTS, DEFAULT_PADDING};

/// Layout and density settings for a figure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// Figure title
    pub title: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// KDE bandwidth
    pub bandwidth: f64,
    /// Number of KDE evaluation points
    pub grid_points: usize,
    /// KDE range padding as a fraction of `|max|`
    pub padding: f64,
    /// Rug baseline offset below zero
    pub rug_offset: f64,
    /// Rug jitter height
    pub rug_jitter: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            title: "Data display with kernel density below (x: index ; y: value)".to_string(),
            width: 1380,
            height: 600,
            bandwidth: DEFAULT_BANDWIDTH,
            grid_points: DEFAULT_GRID_POINTS,
            padding: DEFAULT_PADDING,
            rug_offset: 0.005,
            rug_jitter: 0.003,
        }
    }
}

impl FigureConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}
