//! Per-column statistics.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::report::{ColumnReport, InferredType, NumericSummary, ValueCount};

use super::classifier::{Classifier, parse_numeric};

/// Default length of the top-k list for text columns.
pub const DEFAULT_TOP_K: usize = 5;

/// Computes type-appropriate statistics for a single column.
#[derive(Debug, Clone)]
pub struct ColumnProfiler {
    classifier: Classifier,
    /// Maximum number of values kept in a text column's top-k list.
    top_k: usize,
}

impl ColumnProfiler {
    /// Create a column profiler with default settings.
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Create a column profiler with an explicit classifier and top-k limit.
    pub fn with_config(classifier: Classifier, top_k: usize) -> Self {
        Self { classifier, top_k }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Classify and profile a column in one step.
    pub fn profile_values(&self, name: &str, values: &[&str], total_rows: usize) -> ColumnReport {
        let inferred_type = self.classifier.infer_type(values.iter().copied());
        self.profile(name, values, inferred_type, total_rows)
    }

    /// Profile a column whose type has already been inferred.
    ///
    /// `inferred_type` must come from this profiler's classifier for the same
    /// values: passing `Number` for a column holding non-numeric values is a
    /// caller bug (checked in debug builds).
    pub fn profile(
        &self,
        name: &str,
        values: &[&str],
        inferred_type: InferredType,
        total_rows: usize,
    ) -> ColumnReport {
        let usable: Vec<&str> = values
            .iter()
            .copied()
            .filter(|v| !self.classifier.is_missing(v))
            .collect();

        let count = usable.len();
        let missing = values.len() - count;

        let missing_pct = if total_rows > 0 {
            100.0 * missing as f64 / total_rows as f64
        } else {
            0.0
        };

        let (unique, numeric, top_k) = match inferred_type {
            InferredType::Number => {
                let numbers: Vec<f64> = usable.iter().filter_map(|v| parse_numeric(v)).collect();
                debug_assert_eq!(
                    numbers.len(),
                    count,
                    "column '{}' profiled as number but holds non-numeric values",
                    name
                );
                (distinct_numbers(&numbers), NumericSummary::from_values(&numbers), None)
            }
            InferredType::Text => {
                let counts = value_counts(&usable);
                let unique = counts.len();
                (unique, None, Some(self.top_values(counts)))
            }
        };

        debug!(
            column = name,
            inferred_type = %inferred_type,
            count,
            missing,
            unique,
            "profiled column"
        );

        ColumnReport {
            name: name.to_string(),
            inferred_type,
            count,
            missing,
            missing_pct,
            unique,
            numeric,
            top_k,
        }
    }

    /// Order values by descending count, keeping first-seen order for ties.
    fn top_values(&self, counts: IndexMap<&str, usize>) -> Vec<ValueCount> {
        let mut entries: Vec<(&str, usize)> = counts.into_iter().collect();
        // Stable sort preserves insertion order among equal counts.
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        entries
            .into_iter()
            .take(self.top_k)
            .map(|(value, count)| ValueCount {
                value: value.to_string(),
                count,
            })
            .collect()
    }
}

impl Default for ColumnProfiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Frequency of each distinct value, keyed in first-appearance order.
fn value_counts<'a>(values: &[&'a str]) -> IndexMap<&'a str, usize> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Count distinct values by numeric equality (`1` == `1.0`, `0` == `-0`).
fn distinct_numbers(values: &[f64]) -> usize {
    values
        .iter()
        .map(|&v| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() })
        .collect::<HashSet<u64>>()
        .len()
}
