// src/core/file_system.rs
use crate::core::errors::{LoadError, PersistenceError};
use crate::core::models::{FlightRecord, SourceDocument};

use serde::Serialize;
use serde_json;
use std::fs;
use std::path::{Path, PathBuf};
use log::debug;

#[derive(Serialize)]
struct SourceDocumentRef<'a> {
    flights: &'a [&'a FlightRecord],
}

pub struct FileSystem;

impl FileSystem {
    /// Reads one source file. The returned flights carry source id 0; the
    /// inventory assigns the real id when the source is registered.
    pub fn load_source(path: &Path) -> Result<Vec<FlightRecord>, LoadError> {
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: SourceDocument = serde_json::from_str(&json).map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Parsed {} flights from {}", document.flights.len(), path.display());
        Ok(document.flights)
    }

    /// Overwrites `path` with exactly `flights`. Writes a sibling temp file
    /// first and renames it over the target.
    pub fn save_source(path: &Path, flights: &[&FlightRecord]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(&SourceDocumentRef { flights }).map_err(|source| {
            PersistenceError::Serialize {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let temp_file = Self::temp_path(path);
        let io_error = |source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        };
        fs::write(&temp_file, format!("{}\n", json)).map_err(io_error)?;
        fs::rename(&temp_file, path).map_err(|source| {
            let _ = fs::remove_file(&temp_file);
            io_error(source)
        })?;

        Ok(())
    }

    pub fn temp_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(".temp");
        PathBuf::from(name)
    }
}
