//! Quantiles by linear interpolation between order statistics
//!
//! For a sorted sample `x[0..n]` and probability `p`, the quantile sits at
//! position `p·(n-1)`; fractional positions interpolate between the two
//! neighbouring order statistics. NaN entries are ignored; an infinite entry
//! is an error, since interpolating towards it yields NaN.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// The non-NaN values of a column, in their original order.
///
/// Fails with [`StatsError::NonFiniteValue`] at the first infinite entry.
pub fn finite_values(values: &[f64]) -> StatsResult<Vec<f64>> {
    let mut finite = Vec::with_capacity(values.len());
    for (index, &x) in values.iter().enumerate() {
        if x.is_nan() {
            continue;
        }
        if x.is_infinite() {
            return Err(StatsError::NonFiniteValue { index, value: x });
        }
        finite.push(x);
    }
    Ok(finite)
}

/// Sorted copy of [`finite_values`]
pub fn sorted_finite(values: &[f64]) -> StatsResult<Vec<f64>> {
    let mut sorted = finite_values(values)?;
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(sorted)
}

/// Quantile of an already sorted slice of finite values
pub fn quantile_sorted(sorted: &[f64], p: f64) -> StatsResult<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(StatsError::InvalidProbability { p });
    }
    if sorted.is_empty() {
        return Err(StatsError::EmptyColumn);
    }
    if sorted.len() == 1 {
        return Ok(sorted[0]);
    }

    let pos = p * (sorted.len() - 1) as f64;
    let idx = pos.floor() as usize;
    let frac = pos - idx as f64;
    let a = sorted[idx];
    let b = sorted[(idx + 1).min(sorted.len() - 1)];
    Ok(a + (b - a) * frac)
}

/// Quantile of an unsorted column
///
/// Sorts a copy; use [`Quartiles`] when several quantiles of the same column
/// are needed.
pub fn quantile(values: &[f64], p: f64) -> StatsResult<f64> {
    quantile_sorted(&sorted_finite(values)?, p)
}

/// 25th, 50th and 75th percentiles of a column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Compute all three quartiles with a single sort
    pub fn from_values(values: &[f64]) -> StatsResult<Self> {
        let sorted = sorted_finite(values)?;
        Ok(Self {
            q1: quantile_sorted(&sorted, 0.25)?,
            median: quantile_sorted(&sorted, 0.5)?,
            q3: quantile_sorted(&sorted, 0.75)?,
        })
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
