//! Check command - test a single column pair.

use std::path::PathBuf;

use colored::Colorize;
use fundep::{Fundep, FundepConfig};

use crate::cli::InputArgs;

pub fn run(
    file: PathBuf,
    determinant: String,
    dependent: String,
    input: InputArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let fundep = Fundep::with_config(FundepConfig {
        parser: input.parser_config(),
        ..Default::default()
    });

    let (table, source) = fundep.load(&file)?;
    if verbose {
        println!(
            "Loaded {} rows, {} columns from {} ({})",
            source.row_count, source.column_count, source.file, source.format
        );
    }

    let holds = fundep.check_pair(&table, &determinant, &dependent)?;

    let arrow = format!("{} -> {}", determinant, dependent);
    if holds {
        println!("{} {}", arrow.white().bold(), "holds (candidate)".green());
    } else {
        println!("{} {}", arrow.white().bold(), "does not hold".red());
    }

    Ok(())
}
