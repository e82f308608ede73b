//! IQR outlier detection
//!
//! A value `v` is an outlier when `v > q3 + k·iqr` or `v < q1 - k·iqr`, with
//! `iqr = q3 - q1`. The fences are computed fresh from each column.
//!
//! ```
//! use iqr_stats::iqr_mask;
//!
//! let mask = iqr_mask(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], 1.5).unwrap();
//! assert_eq!(mask.as_slice(), &[false, false, false, false, false, true]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::quantile::Quartiles;

/// Default fence multiplier
pub const DEFAULT_K: f64 = 1.0;

/// Lower and upper outlier fences for a column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrFences {
    /// 25th percentile
    pub q1: f64,
    /// 75th percentile
    pub q3: f64,
    /// q3 - q1
    pub iqr: f64,
    /// Fence multiplier
    pub k: f64,
    /// q1 - k·iqr
    pub lower: f64,
    /// q3 + k·iqr
    pub upper: f64,
}

impl IqrFences {
    /// Compute fences from a column
    ///
    /// Fails on an empty column, on an infinite value and on a negative or
    /// non-finite `k`.
    pub fn new(values: &[f64], k: f64) -> StatsResult<Self> {
        validate_k(k)?;
        let quartiles = Quartiles::from_values(values)?;
        Ok(Self::from_quartiles(quartiles.q1, quartiles.q3, k))
    }

    fn from_quartiles(q1: f64, q3: f64, k: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            q1,
            q3,
            iqr,
            k,
            lower: q1 - k * iqr,
            upper: q3 + k * iqr,
        }
    }

    /// Whether a value falls strictly outside the fences.
    /// NaN compares false both ways and is never flagged.
    pub fn is_outlier(&self, x: f64) -> bool {
        x > self.upper || x < self.lower
    }

    /// Flag every value of a column against these fences
    pub fn mask(&self, values: &[f64]) -> OutlierMask {
        OutlierMask(values.iter().map(|&x| self.is_outlier(x)).collect())
    }
}

fn validate_k(k: f64) -> StatsResult<()> {
    if !k.is_finite() || k < 0.0 {
        return Err(StatsError::InvalidK { k });
    }
    Ok(())
}

/// Compute the outlier mask of a column with fence multiplier `k`
pub fn iqr_mask(values: &[f64], k: f64) -> StatsResult<OutlierMask> {
    Ok(IqrFences::new(values, k)?.mask(values))
}

/// Boolean mask, `true` where the value at that position is an outlier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlierMask(Vec<bool>);

impl OutlierMask {
    pub fn new(flags: Vec<bool>) -> Self {
        Self(flags)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of flagged positions
    pub fn outlier_count(&self) -> usize {
        self.0.iter().filter(|&&flag| flag).count()
    }

    /// Positions flagged as outliers
    pub fn outlier_indices(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &flag)| flag.then_some(i))
            .collect()
    }

    /// Split a column into inliers and outliers, keeping original positions
    pub fn partition(&self, values: &[f64]) -> StatsResult<Partition> {
        if values.len() != self.0.len() {
            return Err(StatsError::LengthMismatch {
                mask: self.0.len(),
                column: values.len(),
            });
        }

        let mut inliers = IndexedColumn::default();
        let mut outliers = IndexedColumn::default();
        for (i, (&x, &flag)) in values.iter().zip(&self.0).enumerate() {
            if flag {
                outliers.push(i, x);
            } else {
                inliers.push(i, x);
            }
        }

        Ok(Partition { inliers, outliers })
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.0
    }
}

/// Subset of a column that remembers where each value came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexedColumn {
    /// Position of each value in the source column
    pub indices: Vec<usize>,
    pub values: Vec<f64>,
}

impl IndexedColumn {
    /// Wrap a full column, indices `0..n`
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            indices: (0..values.len()).collect(),
            values,
        }
    }

    pub fn push(&mut self, index: usize, value: f64) {
        self.indices.push(index);
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// (index, value) pairs in position order
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }
}

/// Inlier and outlier subsets of one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub inliers: IndexedColumn,
    pub outliers: IndexedColumn,
}

impl Partition {
    /// Merge both subsets back into the source column order
    pub fn recombine(&self) -> Vec<f64> {
        let mut points: Vec<(usize, f64)> =
            self.inliers.points().chain(self.outliers.points()).collect();
        points.sort_by_key(|&(i, _)| i);
        points.into_iter().map(|(_, x)| x).collect()
    }

    /// Total number of values across both subsets
    pub fn len(&self) -> usize {
        self.inliers.len() + self.outliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
