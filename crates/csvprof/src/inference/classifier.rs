//! Missing-value detection and column type inference.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::report::InferredType;

/// Tokens treated as missing by default (compared trimmed and case-folded).
pub const DEFAULT_MISSING_TOKENS: &[&str] = &["", "na", "n/a", "null", "none", "nan"];

/// The set of cell values that mean "no data".
///
/// Tokens are stored trimmed and lowercased, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingVocabulary {
    tokens: IndexSet<String>,
}

impl MissingVocabulary {
    /// Create a vocabulary from explicit tokens, replacing the defaults.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens.into_iter().map(|t| normalize(t.as_ref())).collect(),
        }
    }

    /// Add tokens on top of the current ones.
    pub fn with_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tokens
            .extend(tokens.into_iter().map(|t| normalize(t.as_ref())));
        self
    }

    /// Returns true if the value is absent or one of the missing tokens.
    pub fn is_missing(&self, value: Option<&str>) -> bool {
        match value {
            None => true,
            Some(v) => self.tokens.contains(&normalize(v)),
        }
    }

    /// The normalized tokens in insertion order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for MissingVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_MISSING_TOKENS.iter().copied())
    }
}

/// Trim and lowercase a token for comparison.
///
/// Uses Unicode lowercasing rather than full case folding, so custom
/// non-ASCII tokens like `STRASSE`/`straße` do not match each other. The
/// default tokens are ASCII and unaffected.
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Parse a trimmed decimal or scientific literal.
///
/// Accepts an optional sign, digits with an optional decimal point (at least
/// one digit overall) and an optional exponent. Everything else, including
/// `inf`, `nan`, hex and digit separators, yields `None`. Literals that
/// overflow to infinity (`1e999`) also yield `None`, so such a column is text.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if !is_float_literal(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_float_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

/// Decides missingness and column type.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    missing: MissingVocabulary,
}

impl Classifier {
    /// Create a classifier with the default missing vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with a custom missing vocabulary.
    pub fn with_vocabulary(missing: MissingVocabulary) -> Self {
        Self { missing }
    }

    pub fn vocabulary(&self) -> &MissingVocabulary {
        &self.missing
    }

    /// Returns true if the value counts as missing.
    pub fn is_missing(&self, value: &str) -> bool {
        self.missing.is_missing(Some(value))
    }

    /// Infer a column's type from its raw values.
    ///
    /// The column is numeric only if every non-missing value parses; a column
    /// with no usable values is text.
    pub fn infer_type<'a, I>(&self, values: I) -> InferredType
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut usable = values.into_iter().filter(|v| !self.is_missing(v)).peekable();

        if usable.peek().is_none() {
            return InferredType::Text;
        }

        if usable.all(|v| parse_numeric(v).is_some()) {
            InferredType::Number
        } else {
            InferredType::Text
        }
    }
}
