//! Show command - print a saved dependency report.

use std::path::PathBuf;

use colored::Colorize;
use fundep::DependencyReport;

pub fn run(file: PathBuf, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!(
            "Report not found: {}\nRun 'fundep analyze -f <FILE>' first.",
            file.display()
        )
        .into());
    }

    let report = DependencyReport::load(&file)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Dependency report for".cyan().bold(),
        report.source.file.white()
    );
    if verbose {
        println!("  hash: {}", report.source.hash);
        println!("  analyzed at: {}", report.source.analyzed_at);
    }
    println!(
        "  {} rows, {} columns, {} pairs checked",
        report.source.row_count, report.source.column_count, report.summary.pairs_checked
    );
    println!();

    for (key, holds) in &report.dependencies {
        if *holds {
            println!("  {} {}", "✓".green(), key);
        } else {
            println!("  {} {}", "✗".red(), key.dimmed());
        }
    }

    let omitted = report
        .summary
        .pairs_checked
        .saturating_sub(report.dependencies.len());
    if omitted > 0 {
        println!("  ({} rejected pairs omitted)", omitted);
    }

    println!();
    if !report.candidate_keys.is_empty() {
        println!("Candidate keys: {}", report.candidate_keys.join(", "));
    }
    if !report.undetermined_columns.is_empty() {
        println!(
            "Not determined by any single column: {}",
            report.undetermined_columns.join(", ")
        );
    }
    println!("{}", report.notice.dimmed());

    Ok(())
}
