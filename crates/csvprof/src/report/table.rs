//! Table-level report.

use serde::{Deserialize, Serialize};

use super::column::ColumnReport;

/// Profile of an entire table.
///
/// A report is a snapshot of its input: it carries no timestamps or timing,
/// so profiling the same rows twice yields equal reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Number of data rows.
    pub n_rows: usize,
    /// Number of columns.
    pub n_cols: usize,
    /// Column reports in column order.
    pub columns: Vec<ColumnReport>,
}

impl Report {
    /// Create a report from column reports.
    pub fn new(n_rows: usize, columns: Vec<ColumnReport>) -> Self {
        Self {
            n_rows,
            n_cols: columns.len(),
            columns,
        }
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Columns inferred as numeric.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &ColumnReport> {
        self.columns.iter().filter(|c| c.inferred_type.is_numeric())
    }

    /// Columns with at least one missing value.
    pub fn columns_with_missing(&self) -> impl Iterator<Item = &ColumnReport> {
        self.columns.iter().filter(|c| c.missing > 0)
    }
}
