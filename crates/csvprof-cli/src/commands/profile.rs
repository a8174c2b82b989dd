//! Profile command - profile a data file and write JSON and Markdown reports.

use std::path::{Path, PathBuf};

use colored::Colorize;
use csvprof::render::slugify;
use csvprof::{MarkdownOptions, ProfileOutcome, Profiler, write_json, write_markdown};
use tracing::debug;

use crate::cli::ProfileArgs;

pub fn run(
    file: PathBuf,
    out_dir: PathBuf,
    report_name: String,
    preview: bool,
    options: ProfileArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let name = slugify(&report_name);
    if name.is_empty() {
        return Err("Report name must not be empty".into());
    }

    println!("{} {}", "Input:".cyan().bold(), file.display());
    println!("{} {}", "Out:  ".cyan().bold(), out_dir.display());
    println!("{} {}", "Name: ".cyan().bold(), name);

    let config = options.to_config()?;
    let profiler = Profiler::with_config(config);
    let outcome = profiler.profile_file(&file)?;

    let markdown = MarkdownOptions::default()
        .with_source(file.display().to_string())
        .with_missing_tokens(profiler.missing_vocabulary().tokens());

    let (json_path, md_path) = write_reports(&outcome, &markdown, &out_dir, &name)?;

    println!("{} {}", "Wrote".green().bold(), json_path.display());
    println!("{} {}", "Wrote".green().bold(), md_path.display());

    if verbose {
        println!();
        for col in &outcome.report.columns {
            println!(
                "  {:20} {:8} missing={:<6} unique={}",
                col.name, col.inferred_type, col.missing, col.unique
            );
        }
    }

    if preview {
        println!(
            "Rows: {} | Cols: {} | {:.2}ms",
            outcome.report.n_rows, outcome.report.n_cols, outcome.timing_ms
        );
    }

    Ok(())
}

/// Write `<name>.json` and `<name>.md` under `out_dir`.
fn write_reports(
    outcome: &ProfileOutcome,
    markdown: &MarkdownOptions,
    out_dir: &Path,
    name: &str,
) -> csvprof::Result<(PathBuf, PathBuf)> {
    let json_path = out_dir.join(format!("{}.json", name));
    let md_path = out_dir.join(format!("{}.md", name));

    write_json(&outcome.report, &json_path)?;
    write_markdown(&outcome.report, markdown, &md_path)?;

    debug!(json = %json_path.display(), markdown = %md_path.display(), "wrote reports");

    Ok((json_path, md_path))
}
