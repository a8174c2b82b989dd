//! JSON rendering.

use std::path::Path;

use crate::error::Result;
use crate::report::Report;

/// Render a report as 2-space indented JSON with a trailing newline.
pub fn to_json(report: &Report) -> Result<String> {
    let mut text = serde_json::to_string_pretty(report)?;
    text.push('\n');
    Ok(text)
}

/// Write a report as JSON, creating parent directories as needed.
pub fn write_json(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    super::write_text(path.as_ref(), &to_json(report)?)
}
