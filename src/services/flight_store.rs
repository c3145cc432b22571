use std::path::Path;

use crate::core::errors::{LoadError, PersistenceError};
use crate::core::file_system::FileSystem;
use crate::core::models::FlightRecord;

/// Where source files are read from and written back to.
pub trait FlightStore {
    fn load(&self, path: &Path) -> Result<Vec<FlightRecord>, LoadError>;
    fn save(&self, path: &Path, flights: &[&FlightRecord]) -> Result<(), PersistenceError>;
}

/// Store backed by the JSON files on local disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFileStore;

impl JsonFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl FlightStore for JsonFileStore {
    fn load(&self, path: &Path) -> Result<Vec<FlightRecord>, LoadError> {
        FileSystem::load_source(path)
    }

    fn save(&self, path: &Path, flights: &[&FlightRecord]) -> Result<(), PersistenceError> {
        FileSystem::save_source(path, flights)
    }
}
