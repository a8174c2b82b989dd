//! Per-column report and statistics.

use serde::{Deserialize, Serialize};

use super::types::InferredType;

/// Summary statistics for a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl NumericSummary {
    /// Summarize a slice of values. Returns `None` for an empty slice.
    ///
    /// The mean is accumulated incrementally, scaling each term by the count
    /// before adding, so finite inputs near `f64::MAX` keep a finite mean.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;

        let mut min = first;
        let mut max = first;
        let mut mean = first;
        for (i, &value) in rest.iter().enumerate() {
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
            let n = (i + 2) as f64;
            mean += value / n - mean / n;
        }

        Some(Self { min, max, mean })
    }
}

/// A distinct text value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Profile of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnReport {
    /// Column name.
    pub name: String,
    /// Inferred data type.
    #[serde(rename = "type")]
    pub inferred_type: InferredType,
    /// Number of non-missing values.
    pub count: usize,
    /// Number of missing values.
    pub missing: usize,
    /// Missing values as a percentage of all rows (0-100).
    pub missing_pct: f64,
    /// Number of distinct non-missing values.
    pub unique: usize,
    /// Min/max/mean, for numeric columns with at least one value.
    #[serde(flatten)]
    pub numeric: Option<NumericSummary>,
    /// Most frequent values, for text columns.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub top_k: Option<Vec<ValueCount>>,
}

impl ColumnReport {
    /// Total number of values, missing included.
    pub fn total(&self) -> usize {
        self.count + self.missing
    }

    /// Returns true if the column has no usable values.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
