//! Summary command - print a column summary without writing files.

use std::path::PathBuf;

use colored::Colorize;
use csvprof::{ColumnReport, Profiler, to_json};

use crate::cli::ProfileArgs;

pub fn run(
    file: PathBuf,
    json_output: bool,
    options: ProfileArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let profiler = Profiler::with_config(options.to_config()?);
    let outcome = profiler.profile_file(&file)?;
    let report = &outcome.report;

    if json_output {
        print!("{}", to_json(report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Profile:".cyan().bold(),
        outcome.source.file.white()
    );
    println!(
        "Rows: {} | Cols: {} | {:.2}ms",
        report.n_rows.to_string().white().bold(),
        report.n_cols.to_string().white().bold(),
        outcome.timing_ms
    );
    println!();
    println!(
        "{:20} {:8} {:>8} {:>9} {:>8}  {}",
        "name".bold(),
        "type".bold(),
        "missing".bold(),
        "missing%".bold(),
        "unique".bold(),
        "stats".bold()
    );

    for col in &report.columns {
        let missing_pct = format!("{:.1}%", col.missing_pct);
        let missing_pct = if col.missing > 0 {
            missing_pct.yellow()
        } else {
            missing_pct.normal()
        };

        println!(
            "{:20} {:8} {:>8} {:>9} {:>8}  {}",
            col.name,
            col.inferred_type.to_string(),
            col.missing,
            missing_pct,
            col.unique,
            stats_line(col)
        );
    }

    Ok(())
}

fn stats_line(col: &ColumnReport) -> String {
    if let Some(stats) = &col.numeric {
        return format!("min={} max={} mean={:.3}", stats.min, stats.max, stats.mean);
    }

    col.top_k
        .iter()
        .flatten()
        .map(|v| format!("{}({})", v.value, v.count))
        .collect::<Vec<_>>()
        .join(", ")
}
