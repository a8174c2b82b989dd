//! Core type definitions for the report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred data type for a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferredType {
    /// Every non-missing value is a floating-point literal.
    Number,
    /// Anything else, including columns with no usable values.
    #[default]
    Text,
}

impl InferredType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, InferredType::Number)
    }

    /// Lowercase name as used in rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            InferredType::Number => "number",
            InferredType::Text => "text",
        }
    }
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
