//! Example: Find candidate functional dependencies in a data file.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>
//!
//! Example:
//!   cargo run --example analyze -- orders.csv

use std::env;
use std::path::Path;

use fundep::Fundep;

fn main() -> fundep::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example analyze -- orders.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Functional dependencies: {}", file_path);
    println!("{}", separator);
    println!();

    let report = Fundep::new().analyze(path)?;

    println!("## Source Metadata");
    println!("  File: {}", report.source.file);
    println!("  Format: {}", report.source.format);
    println!("  Rows: {}", report.source.row_count);
    println!("  Columns: {}", report.source.column_count);
    println!();

    println!("## Candidate Dependencies ({})", report.summary.holding);
    for dependency in report.holding() {
        println!("  {}", dependency);
    }
    println!();

    println!("## Candidate Keys");
    if report.candidate_keys.is_empty() {
        println!("  (none)");
    }
    for key in &report.candidate_keys {
        println!("  {}", key);
    }
    println!();

    if !report.undetermined_columns.is_empty() {
        println!("## Not Determined By Any Single Column");
        for column in &report.undetermined_columns {
            println!("  {}", column);
        }
        println!();
    }

    println!("{}", report.notice);

    Ok(())
}
