//! Figure model and construction

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use iqr_stats::{IndexedColumn, KdeCurve};

use crate::config::FigureConfig;
use crate::error::{PlotError, PlotResult};
use crate::sink::PlotSink;

/// Paired x/y coordinates
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Values plotted against their source positions
    pub fn from_indexed(column: &IndexedColumn) -> Self {
        Self {
            x: column.indices.iter().map(|&i| i as f64).collect(),
            y: column.values.clone(),
        }
    }

    /// (x, y) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// One dataset: series plot on top, density plot below
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Values against index, drawn as a line
    pub series: Series,
    /// Outliers against index, drawn as markers
    pub outlier_markers: Option<Series>,
    /// Density curve, drawn as a filled line
    pub density: KdeCurve,
    /// Data values on a jittered baseline below zero
    pub rug: Series,
    /// Outliers on the same jittered baseline
    pub outlier_rug: Option<Series>,
}

/// A complete figure, one panel per dataset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub panels: Vec<Panel>,
}

/// Builds figures and hands them to a sink.
///
/// Owns its jitter source, so figure output depends only on the seed and the
/// order of calls on this visualizer.
pub struct Visualizer {
    config: FigureConfig,
    rng: StdRng,
}

impl Visualizer {
    pub fn new(config: FigureConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &FigureConfig {
        &self.config
    }

    /// Title for subsequent figures
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.config.title = title.into();
    }

    /// Build a figure with one panel per column.
    ///
    /// `outliers`, when given, must hold one set per column.
    pub fn build_figure(
        &mut self,
        columns: &[IndexedColumn],
        outliers: Option<&[IndexedColumn]>,
    ) -> PlotResult<Figure> {
        if columns.is_empty() {
            return Err(PlotError::EmptyFigure);
        }
        if let Some(outliers) = outliers {
            if outliers.len() != columns.len() {
                return Err(PlotError::MismatchedOutliers {
                    columns: columns.len(),
                    outliers: outliers.len(),
                });
            }
        }

        let panels = columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let overlay = outliers.map(|sets| &sets[idx]);
                self.build_panel(column, overlay)
            })
            .collect::<PlotResult<Vec<_>>>()?;

        debug!(title = %self.config.title, panels = panels.len(), "built figure");
        Ok(Figure {
            title: self.config.title.clone(),
            width: self.config.width,
            height: self.config.height,
            panels,
        })
    }

    fn build_panel(
        &mut self,
        column: &IndexedColumn,
        outliers: Option<&IndexedColumn>,
    ) -> PlotResult<Panel> {
        let density = KdeCurve::compute(
            &column.values,
            self.config.bandwidth,
            self.config.grid_points,
            self.config.padding,
        )?;

        let rug = self.rug(&column.values);
        let outlier_rug = outliers.map(|o| self.rug(&o.values));

        Ok(Panel {
            series: Series::from_indexed(column),
            outlier_markers: outliers.map(Series::from_indexed),
            density,
            rug,
            outlier_rug,
        })
    }

    /// Values at `y = -offset - jitter·U`
    fn rug(&mut self, values: &[f64]) -> Series {
        let (offset, jitter) = (self.config.rug_offset, self.config.rug_jitter);
        Series {
            x: values.to_vec(),
            y: values
                .iter()
                .map(|_| -offset - jitter * self.rng.random::<f64>())
                .collect(),
        }
    }

    /// Render several datasets side by side
    pub fn display_multiple(
        &mut self,
        sink: &mut dyn PlotSink,
        columns: &[IndexedColumn],
        outliers: Option<&[IndexedColumn]>,
    ) -> PlotResult<()> {
        let figure = self.build_figure(columns, outliers)?;
        sink.render(&figure)
    }

    /// Render a single dataset
    pub fn display_one(
        &mut self,
        sink: &mut dyn PlotSink,
        column: &IndexedColumn,
        outliers: Option<&IndexedColumn>,
    ) -> PlotResult<()> {
        let columns = std::slice::from_ref(column);
        let outliers = outliers.map(std::slice::from_ref);
        self.display_multiple(sink, columns, outliers)
    }
}
