//! iqr-stats - Statistical functions for univariate outlier detection
//!
//! This crate provides the numeric core of the iqr workspace:
//!
//! - **Quantiles**: linear interpolation between order statistics
//! - **IQR fences**: `[q1 - k·iqr, q3 + k·iqr]` bounds and boolean outlier masks
//! - **Partitions**: inlier/outlier subsets that keep their original positions
//! - **KDE**: Gaussian kernel density curves for display
//!
//! Nothing in here renders or draws random numbers; every function is pure
//! over its inputs.

pub mod error;
pub mod iqr;
pub mod kde;
pub mod quantile;

pub use error::*;
pub use iqr::*;
pub use kde::*;
pub use quantile::*;
