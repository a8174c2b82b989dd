//! Rendering of finished reports as JSON and Markdown.

mod json;
mod markdown;

pub use json::{to_json, write_json};
pub use markdown::{MarkdownOptions, render_markdown, write_markdown};

use std::fs;
use std::path::Path;

use crate::error::{ProfileError, Result};

/// Turn free text into a file-name friendly slug: lowercased, whitespace
/// runs collapsed to `-`.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Write text to `path`, creating parent directories as needed.
fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ProfileError::io(parent, e))?;
    }
    fs::write(path, text).map_err(|e| ProfileError::io(path, e))
}
