//! Error types for iqr-stats

use thiserror::Error;

/// Errors raised by the statistical primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// No usable (non-NaN) values to compute a statistic from
    #[error("Column is empty: quantiles are undefined")]
    EmptyColumn,

    /// Column holds +inf or -inf
    #[error("Non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    /// Probability outside [0, 1]
    #[error("Invalid probability {p}: must be within [0, 1]")]
    InvalidProbability { p: f64 },

    /// Fence multiplier is negative or not finite
    #[error("Invalid k {k}: must be a finite value >= 0")]
    InvalidK { k: f64 },

    /// Mask and column lengths differ
    #[error("Length mismatch: mask has {mask} entries, column has {column}")]
    LengthMismatch { mask: usize, column: usize },

    /// KDE bandwidth is zero, negative or not finite
    #[error("Invalid bandwidth {bandwidth}: must be a finite value > 0")]
    InvalidBandwidth { bandwidth: f64 },

    /// Density range padding is negative or not finite
    #[error("Invalid padding {padding}: must be a finite value >= 0")]
    InvalidPadding { padding: f64 },

    /// Evaluation grid needs at least two points
    #[error("Invalid grid size {points}: need at least 2 points")]
    InvalidGrid { points: usize },
}

/// Result type alias for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
