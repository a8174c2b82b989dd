//! Data source abstraction and metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A loosely-typed row: column name to raw cell text, `None` for an absent cell.
pub type Record = IndexMap<String, Option<String>>;

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Detected encoding.
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was read.
    pub read_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been read.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            encoding: "utf-8".to_string(),
            row_count,
            column_count,
            read_at: Utc::now(),
        }
    }
}

/// Parsed tabular data with a fixed, ordered column set.
///
/// Every row holds exactly one cell per header, so column lookups are
/// positional once the table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    ///
    /// Rows shorter than the header are padded with empty cells and longer
    /// rows are truncated.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Build a table from row mappings.
    ///
    /// The column set is taken from the first record. A column absent from a
    /// later record, or present with an absent value, becomes an empty cell.
    /// Keys that only appear in later records are ignored.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut records = records.into_iter().peekable();
        let headers: Vec<String> = records
            .peek()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default();

        let rows = records
            .map(|record| {
                headers
                    .iter()
                    .map(|h| record.get(h).cloned().flatten().unwrap_or_default())
                    .collect()
            })
            .collect();

        Self::new(headers, rows, b',')
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| {
            row.get(index)
                .map(|s| s.as_str())
                .unwrap_or("")
        })
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }
}
