use std::process::ExitCode;

use clap::Parser;
use compsrt::cli::{self, Cli};
use compsrt::utils::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if cli.debug {
        println!("Debug mode enabled");
        println!("Using base directory: {}", cli.base.display());
    }

    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
