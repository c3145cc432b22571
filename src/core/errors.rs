// src/core/errors.rs

use std::io;
use std::path::PathBuf;

use crate::core::models::{SeatId, SourceId};

/// Startup failure while reading the inventory. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("No source files configured")]
    NoSources,

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Source {} is listed more than once", .path.display())]
    DuplicateSource { path: PathBuf },

    #[error("Malformed flight data in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid route '{0}', expected <origin>-<destination> (e.g. 1-2)")]
    InvalidRoute(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Unknown source #{0}")]
    UnknownSource(SourceId),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize flights for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Seat not found: {0}")]
    UnknownSeat(SeatId),

    #[error("Seat is already booked: {0}")]
    AlreadyBooked(SeatId),

    #[error("Seat booked but not saved: {0}")]
    Persistence(#[from] PersistenceError),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
