//! Main Profiler struct and public API.

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::inference::{Classifier, ColumnProfiler, DEFAULT_TOP_K, MissingVocabulary};
use crate::input::{DataTable, Parser, ParserConfig, Record, SourceMetadata};
use crate::report::Report;

/// Configuration for profiling.
#[derive(Debug, Clone)]
pub struct ProfilerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Values treated as missing.
    pub missing: MissingVocabulary,
    /// Length of the top-k list for text columns.
    pub top_k: usize,
}

impl ProfilerConfig {
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_missing(mut self, missing: MissingVocabulary) -> Self {
        self.missing = missing;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            missing: MissingVocabulary::default(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Result of profiling a file.
///
/// Source metadata and timing live here rather than in the [`Report`], which
/// stays a pure function of the rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileOutcome {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The column profiles.
    pub report: Report,
    /// Wall-clock time spent reading and profiling, in milliseconds.
    pub timing_ms: f64,
}

/// The main profiling engine.
pub struct Profiler {
    parser: Parser,
    columns: ColumnProfiler,
}

impl Profiler {
    /// Create a profiler with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a profiler with custom configuration.
    pub fn with_config(config: ProfilerConfig) -> Self {
        let classifier = Classifier::with_vocabulary(config.missing);

        Self {
            parser: Parser::with_config(config.parser),
            columns: ColumnProfiler::with_config(classifier, config.top_k),
        }
    }

    /// The missing-value vocabulary in use.
    pub fn missing_vocabulary(&self) -> &MissingVocabulary {
        self.columns.classifier().vocabulary()
    }

    /// Profile every column of a table, in header order.
    pub fn profile_table(&self, table: &DataTable) -> Report {
        let total_rows = table.row_count();

        let columns = table
            .headers
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let values: Vec<&str> = table.column_values(index).collect();
                self.columns.profile_values(name, &values, total_rows)
            })
            .collect();

        Report::new(total_rows, columns)
    }

    /// Profile row mappings; the column set comes from the first record.
    pub fn profile_records<I>(&self, records: I) -> Report
    where
        I: IntoIterator<Item = Record>,
    {
        self.profile_table(&DataTable::from_records(records))
    }

    /// Read and profile a file.
    pub fn profile_file(&self, path: impl AsRef<Path>) -> Result<ProfileOutcome> {
        let path = path.as_ref();
        let started = Instant::now();

        let (table, source) = self.parser.parse_file(path)?;
        let report = self.profile_table(&table);

        let timing_ms = started.elapsed().as_secs_f64() * 1000.0;

        info!(
            file = %source.file,
            rows = report.n_rows,
            columns = report.n_cols,
            timing_ms,
            "profiled file"
        );

        Ok(ProfileOutcome {
            source,
            report,
            timing_ms,
        })
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}
