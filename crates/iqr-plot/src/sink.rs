//! Rendering capability
//!
//! The statistics and generator crates never draw anything; the pipeline
//! hands finished [`Figure`]s to whatever sink it was given.

use crate::error::PlotResult;
use crate::figure::Figure;

/// Something that can display or store a figure
pub trait PlotSink {
    fn render(&mut self, figure: &Figure) -> PlotResult<()>;
}

/// Keeps every rendered figure in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    figures: Vec<Figure>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn into_figures(self) -> Vec<Figure> {
        self.figures
    }
}

impl PlotSink for RecordingSink {
    fn render(&mut self, figure: &Figure) -> PlotResult<()> {
        self.figures.push(figure.clone());
        Ok(())
    }
}
