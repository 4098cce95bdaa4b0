//! Analyze command - check every column pair and write a dependency report.

use std::path::PathBuf;

use colored::Colorize;
use fundep::{DiscoveryConfig, Fundep, FundepConfig};
use tracing::debug;

use crate::cli::InputArgs;

/// Arguments for the analyze command.
pub struct AnalyzeArgs {
    pub file: PathBuf,
    pub output_dir: PathBuf,
    pub max_composite_key_size: usize,
    pub max_process_count: Option<usize>,
    pub use_gpu: bool,
    pub holding_only: bool,
    pub input: InputArgs,
}

impl AnalyzeArgs {
    /// Analysis configuration for these arguments.
    pub fn config(&self) -> FundepConfig {
        FundepConfig {
            parser: self.input.parser_config(),
            discovery: DiscoveryConfig {
                max_composite_key_size: self.max_composite_key_size,
                max_threads: self.max_process_count,
                use_gpu: self.use_gpu,
                include_rejected: !self.holding_only,
            },
            output_dir: self.output_dir.clone(),
        }
    }
}

pub fn run(args: AnalyzeArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.exists() {
        return Err(format!("File not found: {}", args.file.display()).into());
    }

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        args.file.display().to_string().white()
    );

    let config = args.config();
    debug!(?config, "analysis configuration");

    let fundep = Fundep::with_config(config);
    let (report, output_path) = fundep.analyze_and_save(&args.file)?;

    println!(
        "Checked {} column pairs across {} rows ({} holding, {} rejected)",
        report.summary.pairs_checked.to_string().white().bold(),
        report.source.row_count,
        report.summary.holding.to_string().green(),
        report.summary.rejected.to_string().red()
    );

    if verbose {
        println!();
        println!("{}", "Candidate dependencies:".yellow().bold());
        for dependency in report.holding() {
            println!("  {}", dependency);
        }
    }

    if !report.candidate_keys.is_empty() {
        println!(
            "Candidate keys: {}",
            report.candidate_keys.join(", ").white().bold()
        );
    }
    if !report.undetermined_columns.is_empty() {
        println!(
            "Not determined by any single column: {}",
            report.undetermined_columns.join(", ")
        );
    }

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );
    println!("{}", report.notice.dimmed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_args() {
        let args = AnalyzeArgs {
            file: PathBuf::from("data.csv"),
            output_dir: PathBuf::from("reports"),
            max_composite_key_size: 1,
            max_process_count: Some(4),
            use_gpu: false,
            holding_only: true,
            input: InputArgs {
                no_header: true,
                ..Default::default()
            },
        };

        let config = args.config();
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.discovery.max_threads, Some(4));
        assert!(!config.discovery.include_rejected);
        assert!(!config.parser.has_header);
    }
}
