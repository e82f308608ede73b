//! Output shapes for generated data

use serde::{Deserialize, Serialize};

use crate::fallback::{FallbackNotice, Resolved};

/// Column label used by the table format
pub const VALUES_COLUMN: &str = "values";

/// How generated values are handed back
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain sequence of values
    Raw,
    /// Single labeled column
    #[default]
    Table,
}

impl OutputFormat {
    /// Parse a format name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "raw" => Some(OutputFormat::Raw),
            "table" => Some(OutputFormat::Table),
            _ => None,
        }
    }

    /// Parse a format name, falling back to [`OutputFormat::Raw`]
    pub fn resolve(name: &str) -> Resolved<Self> {
        match Self::from_name(name) {
            Some(format) => Resolved::exact(format),
            None => Resolved::fallback(
                OutputFormat::Raw,
                FallbackNotice::emit("output_format", name, OutputFormat::Raw.name()),
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Raw => "raw",
            OutputFormat::Table => "table",
        }
    }
}

/// A named column of values
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// Generated data in the requested shape
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GeneratedData {
    Raw(Vec<f64>),
    Table(LabeledColumn),
}

impl GeneratedData {
    /// Wrap values in the given format
    pub fn with_format(values: Vec<f64>, format: OutputFormat) -> Self {
        match format {
            OutputFormat::Raw => GeneratedData::Raw(values),
            OutputFormat::Table => GeneratedData::Table(LabeledColumn {
                name: VALUES_COLUMN.to_string(),
                values,
            }),
        }
    }

    /// The underlying values, whatever the shape
    pub fn values(&self) -> &[f64] {
        match self {
            GeneratedData::Raw(values) => values,
            GeneratedData::Table(column) => &column.values,
        }
    }

    pub fn into_values(self) -> Vec<f64> {
        match self {
            GeneratedData::Raw(values) => values,
            GeneratedData::Table(column) => column.values,
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            GeneratedData::Raw(_) => OutputFormat::Raw,
            GeneratedData::Table(_) => OutputFormat::Table,
        }
    }
}
