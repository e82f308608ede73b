//! Error types for iqr-plot

use std::path::PathBuf;
use thiserror::Error;

use iqr_stats::StatsError;

/// Errors raised while building or rendering figures
#[derive(Error, Debug)]
pub enum PlotError {
    /// Outlier overlays must pair up with columns
    #[error("Got {outliers} outlier sets for {columns} columns")]
    MismatchedOutliers { columns: usize, outliers: usize },

    /// Nothing to draw
    #[error("Figure has no columns")]
    EmptyFigure,

    /// Density estimation failed
    #[error("Density estimation failed: {0}")]
    Stats(#[from] StatsError),

    /// Drawing backend failed
    #[error("Failed to draw figure: {0}")]
    Draw(String),

    /// Figure could not be written
    #[error("Failed to write figure to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for plot operations
pub type PlotResult<T> = Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_error_display() {
        let err = PlotError::MismatchedOutliers {
            columns: 3,
            outliers: 2,
        };
        assert!(err.to_string().contains("2 outlier sets for 3 columns"));

        let err = PlotError::Draw("backend closed".to_string());
        assert_eq!(err.to_string(), "Failed to draw figure: backend closed");

        let err = PlotError::from(StatsError::EmptyColumn);
        assert!(err.to_string().contains("empty"));
    }
}
