//! Inference engine: missingness, column types and per-column statistics.

mod classifier;
mod profiler;

pub use classifier::{Classifier, DEFAULT_MISSING_TOKENS, MissingVocabulary, parse_numeric};
pub use profiler::{ColumnProfiler, DEFAULT_TOP_K};
