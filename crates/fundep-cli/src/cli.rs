//! CLI argument definitions using clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// fundep: find candidate functional dependencies in tabular data
#[derive(Parser)]
#[command(name = "fundep")]
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
    /// Check every ordered column pair of a data file and write a report
    Analyze {
        /// Path to the data file (CSV/TSV)
        #[arg(short = 'f', long = "data-file-path", value_name = "FILE")]
        file: PathBuf,

        /// Directory the dependency report is written to
        #[arg(short, long, default_value = "./output/")]
        output_dir: PathBuf,

        /// Largest determinant (composite key) size to try
        #[arg(long, default_value = "1")]
        max_composite_key_size: usize,

        /// Worker threads for pair checks (default: number of CPUs)
        #[arg(long)]
        max_process_count: Option<usize>,

        /// Request GPU execution (checks always run on the CPU)
        #[arg(long, overrides_with = "no_use_gpu", action = ArgAction::SetTrue)]
        use_gpu: bool,

        /// Do not request GPU execution
        #[arg(long, overrides_with = "use_gpu", action = ArgAction::SetTrue)]
        no_use_gpu: bool,

        /// Leave rejected pairs out of the report
        #[arg(long)]
        holding_only: bool,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Check whether one column determines another
    Check {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Left side of the dependency
        #[arg(value_name = "DETERMINANT")]
        determinant: String,

        /// Right side of the dependency
        #[arg(value_name = "DEPENDENT")]
        dependent: String,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Print a saved dependency report
    Show {
        /// Path to a .dependencies.json report
        #[arg(value_name = "REPORT")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options controlling how data files are read.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Field delimiter (default: auto-detect)
    #[arg(short, long)]
    pub delimiter: Option<Delimiter>,

    /// Treat the first row as data and name columns column_1, column_2, ...
    #[arg(long)]
    pub no_header: bool,

    /// Only read the first N data rows
    #[arg(long)]
    pub max_rows: Option<usize>,
}

/// Field delimiter choice
#[derive(Clone, Copy, Debug)]
pub struct Delimiter(pub u8);

impl std::str::FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tab" | "\\t" | "\t" => Ok(Delimiter(b'\t')),
            "comma" | "," => Ok(Delimiter(b',')),
            "semicolon" | ";" => Ok(Delimiter(b';')),
            "pipe" | "|" => Ok(Delimiter(b'|')),
            _ => Err(format!(
                "Unknown delimiter: {}. Use: tab, comma, semicolon, or pipe.",
                s
            )),
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            b'\t' => write!(f, "tab"),
            b',' => write!(f, "comma"),
            b';' => write!(f, "semicolon"),
            b'|' => write!(f, "pipe"),
            other => write!(f, "{}", other as char),
        }
    }
}

impl InputArgs {
    /// Parser configuration for these options.
    pub fn parser_config(&self) -> fundep::ParserConfig {
        fundep::ParserConfig {
            delimiter: self.delimiter.map(|d| d.0),
            has_header: !self.no_header,
            max_rows: self.max_rows,
            ..Default::default()
        }
    }
}
