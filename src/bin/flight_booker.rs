// src/bin/flight_booker.rs

use clap::Parser;
use flight_booker::commands::cli::Cli;
use flight_booker::{initialize_environment, initialize_system, run_session, EXIT_IO_ERROR, EXIT_LOAD_ERROR};
use log::error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    initialize_environment();
    let cli = Cli::parse();

    let config = match cli.app_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::from(EXIT_LOAD_ERROR);
        }
    };

    let mut booking_system = match initialize_system(config) {
        Ok(system) => system,
        Err(e) => {
            error!("{}", e);
            eprintln!("Failed to load flights: {}", e);
            return ExitCode::from(EXIT_LOAD_ERROR);
        }
    };

    let stdin = io::stdin();
    let code = run_session(&mut booking_system, stdin.lock(), io::stdout().lock());
    if code == EXIT_IO_ERROR {
        eprintln!("Exiting after an I/O error; see the log for details.");
    }
    ExitCode::from(code)
}
