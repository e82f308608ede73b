//! iqr-plot - Figures for one-dimensional datasets
//!
//! Each dataset becomes one column of a two-row figure:
//!
//! - **Top**: values against their index, with outliers as markers
//! - **Bottom**: Gaussian KDE curve with a jittered rug of the data below the
//!   baseline, outliers marked on the same rug
//!
//! Figures are plain data ([`Figure`]); drawing happens in a [`PlotSink`].
//! [`SvgSink`] writes SVG documents, [`RecordingSink`] keeps figures in memory.

pub mod config;
pub mod error;
pub mod figure;
pub mod sink;
pub mod svg;

pub use config::*;
pub use error::*;
pub use figure::*;
pub use sink::*;
pub use svg::SvgSink;
