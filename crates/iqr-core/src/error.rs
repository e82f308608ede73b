//! Error types for iqr-core

use thiserror::Error;

use iqr_plot::PlotError;
use iqr_stats::StatsError;

use crate::config::ConfigError;

/// Main error type for pipeline runs
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Outlier detection failed for a dataset
    #[error("Outlier detection failed for '{recipe}': {source}")]
    Detection {
        recipe: String,
        #[source]
        source: StatsError,
    },

    /// Figure could not be built or rendered
    #[error("Visualization failed: {0}")]
    Plot(#[from] PlotError),
}

/// Result type alias for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_display() {
        let err = PipelineError::Detection {
            recipe: "extreme".to_string(),
            source: StatsError::EmptyColumn,
        };
        assert!(err.to_string().contains("extreme"));

        let err = PipelineError::from(ConfigError::MissingField("recipes".to_string()));
        assert!(err.to_string().contains("recipes"));
    }
}
