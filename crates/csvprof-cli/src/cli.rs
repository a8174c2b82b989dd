//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use csvprof::{MissingVocabulary, ParserConfig, ProfilerConfig, input::parse_delimiter};

/// csvprof: per-column profiling for CSV files
#[derive(Parser)]
#[command(name = "csvprof")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a CSV file and write JSON and Markdown reports
    Profile {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output directory
        #[arg(long, default_value = "outputs")]
        out_dir: PathBuf,

        /// Report file name without extension
        #[arg(long, default_value = "report")]
        report_name: String,

        /// Print a short summary after writing
        #[arg(long)]
        preview: bool,

        #[command(flatten)]
        options: ProfileArgs,
    },

    /// Print a column summary without writing files
    Summary {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        options: ProfileArgs,
    },
}

/// Options shared by the profiling commands.
#[derive(Args, Clone, Debug)]
pub struct ProfileArgs {
    /// Number of most frequent values kept for text columns
    #[arg(long, default_value = "5")]
    pub top_k: usize,

    /// Extra token treated as missing (repeatable)
    #[arg(long = "missing", value_name = "TOKEN")]
    pub missing: Vec<String>,

    /// Use only the --missing tokens instead of adding them to the defaults
    #[arg(long, requires = "missing")]
    pub replace_missing: bool,

    /// Field delimiter (default: auto-detect). Use "\t" or "tab" for TSV
    #[arg(short, long)]
    pub delimiter: Option<String>,
}

impl ProfileArgs {
    /// Build the library configuration from the flags.
    pub fn to_config(&self) -> csvprof::Result<ProfilerConfig> {
        let missing = if self.replace_missing {
            MissingVocabulary::new(&self.missing)
        } else {
            MissingVocabulary::default().with_tokens(&self.missing)
        };

        let mut parser = ParserConfig::default();
        if let Some(ref d) = self.delimiter {
            parser = parser.with_delimiter(parse_delimiter(d)?);
        }

        Ok(ProfilerConfig::default()
            .with_parser(parser)
            .with_missing(missing)
            .with_top_k(self.top_k))
    }
}
