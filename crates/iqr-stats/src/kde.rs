//! Gaussian kernel density estimation
//!
//! The estimate at `x` is the mean of normal densities centred on each sample:
//!
//! ```text
//! f(x) = 1/(n·h·√(2π)) · Σ exp(-(x - xᵢ)² / (2h²))
//! ```
//!
//! Used for display only, so the evaluation is a straightforward O(n·m) sum.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::quantile::finite_values;

/// Default kernel bandwidth
pub const DEFAULT_BANDWIDTH: f64 = 0.75;

/// Default number of evaluation points
pub const DEFAULT_GRID_POINTS: usize = 500;

/// Default padding around the data range, as a fraction of `|max|`
pub const DEFAULT_PADDING: f64 = 0.1;

/// Gaussian KDE fitted to a column
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
    norm: f64,
}

impl GaussianKde {
    /// Fit a KDE; NaN samples are dropped, infinite ones rejected
    pub fn fit(values: &[f64], bandwidth: f64) -> StatsResult<Self> {
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return Err(StatsError::InvalidBandwidth { bandwidth });
        }

        let samples = finite_values(values)?;
        if samples.is_empty() {
            return Err(StatsError::EmptyColumn);
        }

        let norm = 1.0 / (samples.len() as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
        Ok(Self {
            samples,
            bandwidth,
            norm,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Density at a single point
    pub fn density(&self, x: f64) -> f64 {
        let two_h2 = 2.0 * self.bandwidth * self.bandwidth;
        let sum: f64 = self
            .samples
            .iter()
            .map(|&xi| (-(x - xi).powi(2) / two_h2).exp())
            .sum();
        sum * self.norm
    }

    /// Density over a grid
    pub fn evaluate(&self, grid: &[f64]) -> Vec<f64> {
        grid.iter().map(|&x| self.density(x)).collect()
    }
}

/// `points` evenly spaced values from `start` to `end`, both inclusive
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points)
                .map(|i| if i == points - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Display range for a density curve: the data range widened on both sides
/// by `padding · |max|`
pub fn padded_range(values: &[f64], padding: f64) -> StatsResult<(f64, f64)> {
    if !padding.is_finite() || padding < 0.0 {
        return Err(StatsError::InvalidPadding { padding });
    }

    let (min, max) = finite_values(values)?
        .into_iter()
        .fold(None, |acc: Option<(f64, f64)>, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
        .ok_or(StatsError::EmptyColumn)?;

    let pad = max.abs() * padding;
    Ok((min - pad, max + pad))
}

/// Density curve ready for plotting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KdeCurve {
    /// Evaluation points
    pub x: Vec<f64>,
    /// Estimated density at each point
    pub density: Vec<f64>,
}

impl KdeCurve {
    /// Fit and evaluate a KDE over the padded data range
    pub fn compute(
        values: &[f64],
        bandwidth: f64,
        points: usize,
        padding: f64,
    ) -> StatsResult<Self> {
        if points < 2 {
            return Err(StatsError::InvalidGrid { points });
        }
        let kde = GaussianKde::fit(values, bandwidth)?;
        let (start, end) = padded_range(values, padding)?;
        let x = linspace(start, end, points);
        let density = kde.evaluate(&x);
        Ok(Self { x, density })
    }

    /// KDE with the display defaults (bandwidth 0.75, 500 points, 10% padding)
    pub fn with_defaults(values: &[f64]) -> StatsResult<Self> {
        Self::compute(values, DEFAULT_BANDWIDTH, DEFAULT_GRID_POINTS, DEFAULT_PADDING)
    }

    /// Largest density value, 0 for an empty curve
    pub fn peak(&self) -> f64 {
        self.density.iter().copied().fold(0.0, f64::max)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
