//! SVG rendering with `plotters`

use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::{PlotError, PlotResult};
use crate::figure::{Figure, Panel, Series};
use crate::sink::PlotSink;

const LINE_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const OUTLIER_COLOR: RGBColor = RGBColor(0xff, 0x7f, 0x0e);
// darkorange
const DENSITY_STROKE: RGBColor = RGBColor(0xff, 0x8c, 0x00);
const DENSITY_FILL: RGBColor = RGBColor(0xf2, 0xe7, 0xda);
const RUG_COLOR: RGBColor = BLACK;

const FONT: &str = "sans-serif";
const MARKER_SIZE: i32 = 3;

type Cell<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// A rendered SVG document
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    /// File stem derived from the figure title
    pub name: String,
    pub content: String,
    /// Where the document was written, if anywhere
    pub path: Option<PathBuf>,
}

/// Renders figures to SVG, optionally writing each one to a directory
#[derive(Debug, Default)]
pub struct SvgSink {
    output_dir: Option<PathBuf>,
    documents: Vec<SvgDocument>,
}

impl SvgSink {
    /// Keep documents in memory only
    pub fn new() -> Self {
        Self::default()
    }

    /// Also write each document to `dir` as `NN-<title>.svg`
    pub fn to_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: Some(dir.into()),
            documents: Vec::new(),
        }
    }

    pub fn documents(&self) -> &[SvgDocument] {
        &self.documents
    }

    fn write(&self, dir: &Path, name: &str, content: &str) -> PlotResult<PathBuf> {
        let path = dir.join(format!("{name}.svg"));
        std::fs::write(&path, content).map_err(|source| PlotError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

impl PlotSink for SvgSink {
    fn render(&mut self, figure: &Figure) -> PlotResult<()> {
        let name = format!("{:02}-{}", self.documents.len() + 1, slug(&figure.title));
        let content = render_svg(figure)?;

        let path = match &self.output_dir {
            Some(dir) => {
                let path = self.write(dir, &name, &content)?;
                info!(path = %path.display(), "wrote figure");
                Some(path)
            }
            None => None,
        };

        self.documents.push(SvgDocument {
            name,
            content,
            path,
        });
        Ok(())
    }
}

/// Render a figure as a standalone SVG document.
///
/// Panels form a 2 × N grid: series plots on the top row, density plots on
/// the bottom row.
pub fn render_svg(figure: &Figure) -> PlotResult<String> {
    if figure.panels.is_empty() {
        return Err(PlotError::EmptyFigure);
    }

    let mut content = String::new();
    {
        let root =
            SVGBackend::with_string(&mut content, (figure.width, figure.height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;
        let body = root
            .titled(&figure.title, (FONT, 18))
            .map_err(draw_error)?;

        let columns = figure.panels.len();
        let cells = body.split_evenly((2, columns));
        for (idx, panel) in figure.panels.iter().enumerate() {
            draw_series_plot(&cells[idx], panel)?;
            draw_density_plot(&cells[columns + idx], panel)?;
        }
        root.present().map_err(draw_error)?;
    }
    Ok(content)
}

fn draw_series_plot(cell: &Cell<'_>, panel: &Panel) -> PlotResult<()> {
    let markers = panel.outlier_markers.as_ref();
    let (x_range, y_range) = data_ranges(
        panel
            .series
            .points()
            .chain(markers.into_iter().flat_map(|m| m.points())),
    );

    let mut chart = ChartBuilder::on(cell)
        .margin(8)
        .x_label_area_size(22)
        .y_label_area_size(44)
        .build_cartesian_2d(x_range, y_range)
        .map_err(draw_error)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .label_style((FONT, 10))
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(LineSeries::new(finite_points(&panel.series), &LINE_COLOR))
        .map_err(draw_error)?;
    if let Some(markers) = markers {
        chart
            .draw_series(
                finite_points(markers).map(|p| Circle::new(p, MARKER_SIZE, OUTLIER_COLOR.filled())),
            )
            .map_err(draw_error)?;
    }
    Ok(())
}

fn draw_density_plot(cell: &Cell<'_>, panel: &Panel) -> PlotResult<()> {
    let curve = Series {
        x: panel.density.x.clone(),
        y: panel.density.density.clone(),
    };
    let outlier_rug = panel.outlier_rug.as_ref();
    let (x_range, y_range) = data_ranges(
        curve
            .points()
            .chain(panel.rug.points())
            .chain(outlier_rug.into_iter().flat_map(|r| r.points())),
    );

    let mut chart = ChartBuilder::on(cell)
        .margin(8)
        .x_label_area_size(22)
        .y_label_area_size(44)
        .build_cartesian_2d(x_range, y_range)
        .map_err(draw_error)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .label_style((FONT, 10))
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(
            AreaSeries::new(finite_points(&curve), 0.0, &DENSITY_FILL)
                .border_style(DENSITY_STROKE.stroke_width(2)),
        )
        .map_err(draw_error)?;
    chart
        .draw_series(finite_points(&panel.rug).map(|p| Cross::new(p, MARKER_SIZE, &RUG_COLOR)))
        .map_err(draw_error)?;
    if let Some(rug) = outlier_rug {
        chart
            .draw_series(finite_points(rug).map(|p| Circle::new(p, MARKER_SIZE, OUTLIER_COLOR.filled())))
            .map_err(draw_error)?;
    }
    Ok(())
}

fn finite_points(series: &Series) -> impl Iterator<Item = (f64, f64)> + '_ {
    series
        .points()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
}

/// Axis ranges spanning the finite coordinates of `points`
fn data_ranges(points: impl Iterator<Item = (f64, f64)>) -> (Range<f64>, Range<f64>) {
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);
    for (px, py) in points {
        if px.is_finite() {
            x = (x.0.min(px), x.1.max(px));
        }
        if py.is_finite() {
            y = (y.0.min(py), y.1.max(py));
        }
    }
    (axis_range(x), axis_range(y))
}

// A single value gets a unit-wide range; no values give [0, 1]
fn axis_range((lo, hi): (f64, f64)) -> Range<f64> {
    if lo > hi {
        0.0..1.0
    } else if lo == hi {
        lo - 0.5..hi + 0.5
    } else {
        lo..hi
    }
}

fn draw_error(err: impl std::fmt::Display) -> PlotError {
    PlotError::Draw(err.to_string())
}

/// Lowercase file-name-safe form of a title
fn slug(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "figure".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FigureConfig;
    use crate::figure::Visualizer;
    use iqr_stats::IndexedColumn;

    fn figure(outliers: bool) -> Figure {
        let mut vis = Visualizer::new(FigureConfig::default().with_title("IQR <demo>"), 1);
        let mut inliers = IndexedColumn::default();
        for (i, v) in [3.0, 4.0, 5.0, 4.5].into_iter().enumerate() {
            inliers.push(i, v);
        }
        let mut extreme = IndexedColumn::default();
        extreme.push(4, 30.0);

        let overlay = [extreme];
        vis.build_figure(&[inliers], outliers.then_some(&overlay[..]))
            .unwrap()
    }

    #[test]
    fn test_render_svg_structure() {
        let svg = render_svg(&figure(false)).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("demo"));
        assert!(svg.to_uppercase().contains("#F2E7DA"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_render_svg_outliers() {
        let svg = render_svg(&figure(true)).unwrap();
        // One marker on the series plot, one on the rug
        assert_eq!(svg.matches("<circle").count(), 2);
    }

    #[test]
    fn test_render_svg_empty_figure() {
        let empty = Figure {
            title: "empty".to_string(),
            width: 400,
            height: 300,
            panels: Vec::new(),
        };
        assert!(matches!(render_svg(&empty), Err(PlotError::EmptyFigure)));
    }

    #[test]
    fn test_render_svg_constant_column() {
        let mut vis = Visualizer::new(FigureConfig::default(), 0);
        let figure = vis
            .build_figure(&[IndexedColumn::from_values(vec![2.0; 5])], None)
            .unwrap();
        assert!(render_svg(&figure).is_ok());
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("IQR outliers (k = 1)"), "iqr-outliers-k-1");
        assert_eq!(slug("!!!"), "figure");
    }

    #[test]
    fn test_axis_range() {
        assert_eq!(axis_range((2.0, 2.0)), 1.5..2.5);
        assert_eq!(axis_range((f64::INFINITY, f64::NEG_INFINITY)), 0.0..1.0);
        assert_eq!(axis_range((1.0, 3.0)), 1.0..3.0);
    }

    #[test]
    fn test_sink_keeps_documents_in_memory() {
        let mut sink = SvgSink::new();
        sink.render(&figure(false)).unwrap();
        sink.render(&figure(true)).unwrap();

        let docs = sink.documents();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].name, "01-iqr-demo");
        assert_eq!(docs[1].name, "02-iqr-demo");
        assert!(docs[0].path.is_none());
    }

    #[test]
    fn test_sink_writes_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = SvgSink::to_dir(dir.path());
        sink.render(&figure(true)).unwrap();

        let path = sink.documents()[0].path.clone().unwrap();
        assert_eq!(path, dir.path().join("01-iqr-demo.svg"));
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, sink.documents()[0].content);
    }

    #[test]
    fn test_sink_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = SvgSink::to_dir(dir.path().join("missing"));
        assert!(matches!(
            sink.render(&figure(false)),
            Err(PlotError::Write { .. })
        ));
    }
}
