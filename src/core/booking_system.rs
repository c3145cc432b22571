// src/core/booking_system.rs

use crate::app_config::AppConfig;
use crate::core::errors::{BookingError, LoadError, PersistenceError};
use crate::core::models::{Route, SeatId, SourceId};
use crate::core::state::{BestSeat, Inventory};
use crate::services::flight_store::FlightStore;

use std::collections::{BTreeSet, HashSet};
use std::fs;
use log::{info, debug, warn, error};

pub struct BookingSystem {
    inventory: Inventory,
    store: Box<dyn FlightStore>,
    config: AppConfig,
    pending: BTreeSet<SourceId>,
}

impl BookingSystem {
    pub fn new(config: AppConfig, store: Box<dyn FlightStore>, inventory: Inventory) -> Self {
        Self {
            inventory,
            store,
            config,
            pending: BTreeSet::new(),
        }
    }

    /// Reads every configured source. A single missing, malformed or
    /// repeated source fails the whole load.
    pub fn load(config: AppConfig, store: Box<dyn FlightStore>) -> Result<Self, LoadError> {
        if config.source_files.is_empty() {
            return Err(LoadError::NoSources);
        }

        let mut inventory = Inventory::new();
        let mut seen = HashSet::new();
        for path in &config.source_files {
            // Paths the store can't resolve on disk are compared as written
            let key = fs::canonicalize(path).unwrap_or_else(|_| path.clone());
            if !seen.insert(key) {
                return Err(LoadError::DuplicateSource { path: path.clone() });
            }

            let flights = store.load(path)?;
            info!("Loaded {} flights from {}", flights.len(), path.display());
            inventory.add_source(path.clone(), flights);
        }

        Ok(Self::new(config, store, inventory))
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Sources whose latest in-memory state has not been written yet.
    pub fn pending_sources(&self) -> &BTreeSet<SourceId> {
        &self.pending
    }

    pub fn routes(&self) -> Vec<Route> {
        self.inventory.routes()
    }

    pub fn find_best_seat(&self, route: &Route) -> Option<BestSeat> {
        let best = self.inventory.find_best_seat(route);
        match &best {
            Some(seat) => debug!("Best seat for {}: {} at {}", route, seat.id, seat.price),
            None => debug!("No free seat for {}", route),
        }
        best
    }

    /// Books exactly the seat identified by `id` and writes its source back.
    /// If the write fails the seat stays booked in memory and the source is
    /// left pending.
    pub fn book_seat(&mut self, id: SeatId) -> Result<(), BookingError> {
        let seat = self.inventory.seat_mut(id).ok_or(BookingError::UnknownSeat(id))?;
        seat.book().map_err(|_| BookingError::AlreadyBooked(id))?;
        let price = seat.price;

        let source = self.inventory.flight(id.flight).map(|flight| flight.source).ok_or(BookingError::UnknownSeat(id))?;
        info!("Booked {} at {}", id, price);

        self.persist_source(source)?;
        Ok(())
    }

    /// Writes every flight of `source`, retrying up to `persist_retries` times.
    pub fn persist_source(&mut self, source: SourceId) -> Result<(), PersistenceError> {
        let path = self
            .inventory
            .source_path(source)
            .ok_or(PersistenceError::UnknownSource(source))?
            .to_path_buf();
        let flights = self.inventory.flights_for_source(source);
        let attempts = self.config.persist_retries.saturating_add(1);

        let mut attempt = 1;
        let result = loop {
            match self.store.save(&path, &flights) {
                Ok(()) => break Ok(()),
                Err(e) if attempt < attempts => {
                    warn!("Attempt {}/{} to save {} failed: {}", attempt, attempts, path.display(), e);
                    attempt += 1;
                }
                Err(e) => break Err(e),
            }
        };

        match result {
            Ok(()) => {
                info!("Saved {} flights to {}", flights.len(), path.display());
                self.pending.remove(&source);
                Ok(())
            }
            Err(e) => {
                error!("Giving up on saving {}: {}", path.display(), e);
                self.pending.insert(source);
                Err(e)
            }
        }
    }

    /// Tries once more to write every pending source. Returns the errors for
    /// sources that still could not be saved.
    pub fn flush_pending(&mut self) -> Vec<PersistenceError> {
        let pending: Vec<SourceId> = self.pending.iter().copied().collect();
        pending
            .into_iter()
            .filter_map(|source| self.persist_source(source).err())
            .collect()
    }
}
