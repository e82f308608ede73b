//! The outlier detection pipeline
//!
//! For every configured recipe: generate a column, compute its IQR fences,
//! flag outliers and split the column. Then render two figures, the raw
//! datasets first and the inliers with their outliers overlaid second.

use serde::Serialize;
use tracing::{info, warn};

use iqr_gen::{FallbackNotice, GeneratorRegistry};
use iqr_plot::{PlotSink, Visualizer};
use iqr_stats::{IndexedColumn, IqrFences, OutlierMask, Partition};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};

/// Outcome of outlier detection on one dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    /// Recipe name as configured
    pub recipe: String,
    /// Defaults substituted while generating
    pub fallbacks: Vec<FallbackNotice>,
    /// Fences the mask was computed from
    pub fences: IqrFences,
    pub mask: OutlierMask,
    pub partition: Partition,
}

impl DatasetReport {
    pub fn outlier_count(&self) -> usize {
        self.partition.outliers.len()
    }

    pub fn inlier_count(&self) -> usize {
        self.partition.inliers.len()
    }
}

/// Outcome of a full pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub datasets: Vec<DatasetReport>,
}

impl PipelineReport {
    /// All substitutions across datasets
    pub fn fallbacks(&self) -> impl Iterator<Item = &FallbackNotice> {
        self.datasets.iter().flat_map(|d| d.fallbacks.iter())
    }

    pub fn total_outliers(&self) -> usize {
        self.datasets.iter().map(DatasetReport::outlier_count).sum()
    }
}

/// Classify one column and split it into inliers and outliers
pub fn detect(recipe: &str, values: &[f64], k: f64) -> PipelineResult<(IqrFences, OutlierMask, Partition)> {
    let detection = |source| PipelineError::Detection {
        recipe: recipe.to_string(),
        source,
    };

    let fences = IqrFences::new(values, k).map_err(detection)?;
    let mask = fences.mask(values);
    let partition = mask.partition(values).map_err(detection)?;
    Ok((fences, mask, partition))
}

/// Generate and classify every configured dataset, without rendering
pub fn analyze(config: &PipelineConfig) -> PipelineResult<PipelineReport> {
    config.validate()?;
    let registry = GeneratorRegistry::new();

    let mut datasets = Vec::with_capacity(config.recipes.len());
    for recipe in &config.recipes {
        let generated = registry.generate(recipe, &config.output_format, config.seed);
        let values = generated.value.into_values();

        let (fences, mask, partition) = detect(recipe, &values, config.k)?;
        info!(
            recipe = %recipe,
            q1 = fences.q1,
            q3 = fences.q3,
            lower = fences.lower,
            upper = fences.upper,
            outliers = partition.outliers.len(),
            total = values.len(),
            "classified dataset"
        );

        datasets.push(DatasetReport {
            recipe: recipe.clone(),
            fallbacks: generated.fallbacks,
            fences,
            mask,
            partition,
        });
    }

    Ok(PipelineReport { datasets })
}

/// Run the whole pipeline, rendering both figures to `sink`
pub fn run(config: &PipelineConfig, sink: &mut dyn PlotSink) -> PipelineResult<PipelineReport> {
    let report = analyze(config)?;

    let raw: Vec<IndexedColumn> = report
        .datasets
        .iter()
        .map(|d| IndexedColumn::from_values(d.partition.recombine()))
        .collect();
    let inliers: Vec<IndexedColumn> = report
        .datasets
        .iter()
        .map(|d| d.partition.inliers.clone())
        .collect();
    let outliers: Vec<IndexedColumn> = report
        .datasets
        .iter()
        .map(|d| d.partition.outliers.clone())
        .collect();

    let mut visualizer = Visualizer::new(config.figure.clone(), config.seed);
    visualizer.display_multiple(sink, &raw, None)?;

    if inliers.iter().any(IndexedColumn::is_empty) {
        warn!("a dataset has no inliers left, skipping the filtered figure");
        return Ok(report);
    }
    visualizer.set_title(format!(
        "{} - IQR outliers (k = {})",
        config.figure.title, config.k
    ));
    visualizer.display_multiple(sink, &inliers, Some(&outliers))?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqr_plot::RecordingSink;
    use iqr_stats::StatsError;

    #[test]
    fn test_detect_reference_example() {
        let (fences, mask, partition) =
            detect("manual", &[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], 1.5).unwrap();
        assert!((fences.upper - 8.5).abs() < 1e-12);
        assert_eq!(mask.outlier_indices(), vec![5]);
        assert_eq!(partition.outliers.values, vec![100.0]);
    }

    #[test]
    fn test_detect_empty_column() {
        let err = detect("empty", &[], 1.0).unwrap_err();
        assert!(matches!(err, PipelineError::Detection { ref recipe, .. } if recipe == "empty"));
    }

    #[test]
    fn test_detect_infinite_value() {
        let err = detect("manual", &[1.0, 2.0, 3.0, 4.0, f64::INFINITY], 1.0).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Detection {
                source: StatsError::NonFiniteValue { index: 4, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_analyze_default() {
        let report = analyze(&PipelineConfig::default()).unwrap();
        assert_eq!(report.datasets.len(), 3);
        for dataset in &report.datasets {
            assert_eq!(dataset.partition.len(), 200);
            assert_eq!(dataset.mask.len(), 200);
            assert!(dataset.fallbacks.is_empty());
        }
    }

    #[test]
    fn test_analyze_rejects_invalid_config() {
        let mut config = PipelineConfig::default();
        config.k = -0.1;
        assert!(matches!(analyze(&config), Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_run_renders_two_figures() {
        let mut sink = RecordingSink::new();
        let report = run(&PipelineConfig::default(), &mut sink).unwrap();

        let figures = sink.figures();
        assert_eq!(figures.len(), 2);
        assert!(figures[0].panels.iter().all(|p| p.outlier_markers.is_none()));
        assert!(figures[1].panels.iter().all(|p| p.outlier_markers.is_some()));
        assert!(figures[1].title.contains("k = 1"));

        for (panel, dataset) in figures[1].panels.iter().zip(&report.datasets) {
            assert_eq!(panel.series.len(), dataset.inlier_count());
        }
    }
}
