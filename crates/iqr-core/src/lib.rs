//! iqr-core - IQR outlier detection pipeline
//!
//! Ties the workspace together:
//!
//! - **Config**: seed, fence multiplier, recipes, figure settings
//! - **Pipeline**: generate → classify → partition → visualize
//!
//! # Example
//!
//! ```
//! use iqr_core::{run, PipelineConfig};
//! use iqr_plot::RecordingSink;
//!
//! let mut sink = RecordingSink::new();
//! let report = run(&PipelineConfig::default(), &mut sink).unwrap();
//! assert_eq!(report.datasets.len(), 3);
//! assert_eq!(sink.figures().len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use pipeline::*;
