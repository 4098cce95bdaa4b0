//! fundep CLI - candidate functional dependency discovery.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            file,
            output_dir,
            max_composite_key_size,
            max_process_count,
            use_gpu,
            no_use_gpu,
            holding_only,
            input,
        } => commands::analyze::run(
            commands::analyze::AnalyzeArgs {
                file,
                output_dir,
                max_composite_key_size,
                max_process_count,
                use_gpu: use_gpu && !no_use_gpu,
                holding_only,
                input,
            },
            cli.verbose,
        ),

        Commands::Check {
            file,
            determinant,
            dependent,
            input,
        } => commands::check::run(file, determinant, dependent, input, cli.verbose),

        Commands::Show { file, json } => commands::show::run(file, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
