//! Report types produced by the profiler.

mod column;
mod table;
mod types;

pub use column::{ColumnReport, NumericSummary, ValueCount};
pub use table::Report;
pub use types::InferredType;
