use clap::Parser;
use log::error;
use radclass_core::classification::warm_up;
use radclass_core::cli::{execute, Cli};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    // Compile keyword tables before handling anything
    if let Err(e) = warm_up() {
        error!("Failed to compile keyword tables: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    match execute(&cli.command, &cli.format) {
        Ok(output) => {
            println!("{}", output.stdout);
            if !output.success {
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(if e.is_client_error() { 2 } else { 1 });
        }
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}
