//! Example: Profile a tabular data file.
//!
//! Usage:
//!   cargo run --example profile -- <file_path>
//!
//! Example:
//!   cargo run --example profile -- data/sample.csv

use std::env;
use std::path::Path;

use csvprof::{MarkdownOptions, Profiler, render_markdown};

fn main() -> csvprof::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example profile -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example profile -- data/sample.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let outcome = Profiler::new().profile_file(path)?;

    println!("## Source Metadata");
    println!("  File: {}", outcome.source.file);
    println!("  Format: {}", outcome.source.format);
    println!("  Hash: {}", outcome.source.hash);
    println!("  Time: {:.2}ms", outcome.timing_ms);
    println!();

    let options = MarkdownOptions::default().with_source(outcome.source.file.clone());
    println!("{}", render_markdown(&outcome.report, &options));

    Ok(())
}
