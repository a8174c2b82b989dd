//! csvprof: per-column profiling for tabular text files.
//!
//! csvprof reads a CSV/TSV file, decides for each column whether it is
//! numeric or text, and computes statistics suited to that type:
//! min/max/mean for numbers, a frequency top-k for text. A configurable
//! vocabulary of tokens (`""`, `na`, `n/a`, `null`, `none`, `nan` by default)
//! marks cells as missing.
//!
//! # Example
//!
//! ```no_run
//! use csvprof::{MarkdownOptions, Profiler, render_markdown};
//!
//! let profiler = Profiler::new();
//! let outcome = profiler.profile_file("data.csv").unwrap();
//!
//! println!("Rows: {}", outcome.report.n_rows);
//! println!("{}", render_markdown(&outcome.report, &MarkdownOptions::default()));
//! ```

pub mod error;
pub mod inference;
pub mod input;
pub mod render;
pub mod report;

mod profiler;

pub use crate::profiler::{ProfileOutcome, Profiler, ProfilerConfig};
pub use error::{ProfileError, Result};
pub use inference::{Classifier, ColumnProfiler, MissingVocabulary, parse_numeric};
pub use input::{DataTable, Parser, ParserConfig, Record, SourceMetadata};
pub use render::{MarkdownOptions, render_markdown, to_json, write_json, write_markdown};
pub use report::{ColumnReport, InferredType, NumericSummary, Report, ValueCount};
