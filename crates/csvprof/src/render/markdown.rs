//! Markdown rendering.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::inference::DEFAULT_MISSING_TOKENS;
use crate::report::{ColumnReport, Report};

/// Number of top values shown in the summary table's stats cell.
const DEFAULT_PREVIEW_TOP: usize = 3;

/// Presentation details that are not part of the report itself.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Name of the profiled source, shown in the header.
    pub source: Option<String>,
    /// Generation time shown in the header.
    pub generated_at: DateTime<Local>,
    /// Missing-value tokens listed in the notes.
    pub missing_tokens: Vec<String>,
    /// How many top values the summary table shows per text column.
    pub preview_top: usize,
}

impl MarkdownOptions {
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_generated_at(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn with_missing_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            source: None,
            generated_at: Local::now(),
            missing_tokens: DEFAULT_MISSING_TOKENS.iter().map(|t| t.to_string()).collect(),
            preview_top: DEFAULT_PREVIEW_TOP,
        }
    }
}

/// Render a report as a Markdown document.
pub fn render_markdown(report: &Report, options: &MarkdownOptions) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_document(&mut out, report, options);
    out
}

/// Render and write a report as Markdown, creating parent directories as needed.
pub fn write_markdown(report: &Report, options: &MarkdownOptions, path: impl AsRef<Path>) -> Result<()> {
    super::write_text(path.as_ref(), &render_markdown(report, options))
}

fn write_document(out: &mut String, report: &Report, options: &MarkdownOptions) -> std::fmt::Result {
    write_header(out, options)?;
    write_summary(out, report)?;
    write_table(out, report, options)?;
    write_details(out, report)?;
    write_notes(out, options)
}

fn write_header(out: &mut String, options: &MarkdownOptions) -> std::fmt::Result {
    writeln!(out, "# CSV Profiling Report")?;
    writeln!(out)?;
    if let Some(source) = &options.source {
        writeln!(out, "- **Source:** `{}`", source)?;
    }
    writeln!(
        out,
        "- **Generated:** `{}`",
        options.generated_at.format("%Y-%m-%dT%H:%M:%S")
    )?;
    writeln!(out)
}

fn write_summary(out: &mut String, report: &Report) -> std::fmt::Result {
    writeln!(out, "## Summary")?;
    writeln!(out)?;
    writeln!(out, "- Rows: **{}**", report.n_rows)?;
    writeln!(out, "- Columns: **{}**", report.n_cols)?;
    writeln!(out, "- Numeric columns: {}", report.numeric_columns().count())?;
    writeln!(
        out,
        "- Columns with missing values: {}",
        report.columns_with_missing().count()
    )?;
    writeln!(out)
}

fn write_table(out: &mut String, report: &Report, options: &MarkdownOptions) -> std::fmt::Result {
    writeln!(out, "## Columns")?;
    writeln!(out)?;
    writeln!(out, "| name | type | missing | missing_pct | unique | stats |")?;
    writeln!(out, "|---|---|---:|---:|---:|---|")?;
    for column in &report.columns {
        writeln!(
            out,
            "| {} | {} | {} | {:.1}% | {} | {} |",
            escape_cell(&column.name),
            column.inferred_type,
            column.missing,
            column.missing_pct,
            column.unique,
            escape_cell(&stats_cell(column, options.preview_top)),
        )?;
    }
    writeln!(out)
}

fn write_details(out: &mut String, report: &Report) -> std::fmt::Result {
    writeln!(out, "## Column details")?;
    writeln!(out)?;
    for column in &report.columns {
        writeln!(out, "### {}", column.name)?;
        writeln!(out)?;
        writeln!(out, "- Type: {}", column.inferred_type)?;
        writeln!(out, "- Non-missing: {}", column.count)?;
        writeln!(out, "- Missing: {} ({:.1}%)", column.missing, column.missing_pct)?;
        writeln!(out, "- Unique: {}", column.unique)?;

        if let Some(stats) = &column.numeric {
            writeln!(out, "- Min: {}", format_number(stats.min))?;
            writeln!(out, "- Max: {}", format_number(stats.max))?;
            writeln!(out, "- Mean: {}", format_number(stats.mean))?;
        }

        if let Some(top) = column.top_k.as_ref().filter(|t| !t.is_empty()) {
            writeln!(out, "- Top values:")?;
            for item in top {
                writeln!(out, "  - `{}`: {}", item.value, item.count)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_notes(out: &mut String, options: &MarkdownOptions) -> std::fmt::Result {
    let tokens: Vec<String> = options
        .missing_tokens
        .iter()
        .map(|t| if t.is_empty() { "`''`".to_string() } else { format!("`{}`", t) })
        .collect();

    writeln!(out, "## Notes")?;
    writeln!(out)?;
    writeln!(
        out,
        "- Missing values are: {} (case-insensitive, surrounding whitespace ignored)",
        tokens.join(", ")
    )
}

fn stats_cell(column: &ColumnReport, preview_top: usize) -> String {
    if let Some(stats) = &column.numeric {
        return format!(
            "min={}, max={}, mean={}",
            format_number(stats.min),
            format_number(stats.max),
            format_number(stats.mean)
        );
    }

    let preview: Vec<String> = column
        .top_k
        .iter()
        .flatten()
        .take(preview_top)
        .map(|item| format!("{}({})", item.value, item.count))
        .collect();

    if preview.is_empty() {
        String::new()
    } else {
        format!("top: {}", preview.join(", "))
    }
}

/// Whole numbers without a fraction, others to at most four decimals.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value);
    }
    let text = format!("{:.4}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
