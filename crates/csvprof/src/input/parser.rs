//! CSV/TSV reader with delimiter detection.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{ProfileError, Result};
use super::source::{DataTable, SourceMetadata};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// UTF-8 byte-order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl ParserConfig {
    /// Use a fixed delimiter instead of auto-detection.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Stop reading after `max_rows` data rows.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses tabular data files.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| ProfileError::io(path, e))?;
        let size_bytes = contents.len() as u64;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let data_table = self.parse_bytes(&contents)?;

        let format = match data_table.delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        debug!(
            path = %path.display(),
            format = %format,
            rows = data_table.row_count(),
            columns = data_table.column_count(),
            "parsed input file"
        );

        let source_metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            data_table.row_count(),
            data_table.column_count(),
        );

        Ok((data_table, source_metadata))
    }

    /// Parse in-memory bytes, tolerating a leading UTF-8 byte-order mark.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<DataTable> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

        if let Err(e) = std::str::from_utf8(bytes) {
            return Err(ProfileError::Encoding(format!(
                "input is not valid UTF-8: {}",
                e
            )));
        }

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };

        self.parse_delimited(bytes, delimiter)
    }

    /// Parse a string slice.
    pub fn parse_str(&self, text: &str) -> Result<DataTable> {
        self.parse_bytes(text.as_bytes())
    }

    fn parse_delimited(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = if self.config.has_header {
            reader
                .headers()?
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            Vec::new()
        };

        let mut rows: Vec<Vec<String>> = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        // Without a header row, name columns after the widest row.
        let headers = if self.config.has_header {
            headers
        } else {
            let width = rows.iter().map(Vec::len).max().unwrap_or(0);
            (0..width).map(|i| format!("column_{}", i + 1)).collect()
        };

        if headers.is_empty() {
            return Err(ProfileError::EmptyData("No columns found".to_string()));
        }

        Ok(DataTable::new(headers, rows, delimiter))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a user-supplied delimiter such as `,`, `;`, `\t` or `tab`.
pub fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "\\t" | "tab" | "\t" => Ok(b'\t'),
        _ => {
            let bytes = value.as_bytes();
            if bytes.len() == 1 && bytes[0].is_ascii() && bytes[0] != b'\n' && bytes[0] != b'"' {
                Ok(bytes[0])
            } else {
                Err(ProfileError::InvalidDelimiter(format!(
                    "'{}' is not a single ASCII character",
                    value
                )))
            }
        }
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(ProfileError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tab breaks ties since it
        // rarely appears inside values.
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
