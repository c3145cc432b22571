use crate::app_config::AppConfig;
use crate::commands::session::{Session, SessionSummary};
use crate::core::booking_system::BookingSystem;
use crate::core::errors::LoadError;
use crate::services::flight_store::JsonFileStore;
use dotenvy::dotenv;
use log::{info, error};
use std::io::{BufRead, Write};

pub mod core;
pub mod services;
pub mod commands;
pub mod app_config;

pub const EXIT_OK: u8 = 0;
pub const EXIT_LOAD_ERROR: u8 = 1;
pub const EXIT_IO_ERROR: u8 = 2;

/// Loads `.env` before the logger starts so `RUST_LOG` can come from it.
pub fn initialize_environment() {
    dotenv().ok();
    pretty_env_logger::init();
}

pub fn initialize_system(config: AppConfig) -> Result<BookingSystem, LoadError> {
    BookingSystem::load(config, Box::new(JsonFileStore::new()))
}

/// Runs one interactive session, then retries any writes that failed during
/// it. Returns the process exit code.
pub fn run_session<R: BufRead, W: Write>(system: &mut BookingSystem, input: R, output: W) -> u8 {
    let summary = match Session::new(system, input, output).run() {
        Ok(summary) => summary,
        Err(e) => {
            error!("Session aborted: {}", e);
            let unsaved = system.flush_pending();
            if !unsaved.is_empty() {
                error!("{} source(s) could not be saved", unsaved.len());
            }
            return EXIT_IO_ERROR;
        }
    };
    report_summary(&summary);

    let unsaved = system.flush_pending();
    if unsaved.is_empty() {
        EXIT_OK
    } else {
        for e in &unsaved {
            error!("Unsaved bookings remain: {}", e);
        }
        EXIT_IO_ERROR
    }
}

fn report_summary(summary: &SessionSummary) {
    info!(
        "Session finished with {} booking(s), {} not saved on first attempt",
        summary.bookings, summary.unsaved_bookings
    );
}
