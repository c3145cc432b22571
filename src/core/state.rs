// src/core/state.rs

use itertools::Itertools;
use std::path::{Path, PathBuf};

use crate::core::models::{FlightRecord, Route, SeatId, SeatRecord, SourceId};
use rust_decimal::Decimal;

/// Cheapest free seat found on a route, with the price it had when shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BestSeat {
    pub id: SeatId,
    pub price: Decimal,
}

/// Every loaded flight, in source order then file order, plus the list of
/// source paths the flights point back into.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    sources: Vec<PathBuf>,
    flights: Vec<FlightRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    // Getters
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    pub fn source_path(&self, source: SourceId) -> Option<&Path> {
        self.sources.get(source).map(PathBuf::as_path)
    }

    pub fn flight(&self, index: usize) -> Option<&FlightRecord> {
        self.flights.get(index)
    }

    pub fn seat(&self, id: SeatId) -> Option<&SeatRecord> {
        self.flights.get(id.flight)?.seats.get(id.seat)
    }

    pub fn seat_mut(&mut self, id: SeatId) -> Option<&mut SeatRecord> {
        self.flights.get_mut(id.flight)?.seats.get_mut(id.seat)
    }

    // Modifiers

    /// Registers a source and its flights. The flights' back-references are
    /// rewritten to the new source's id.
    pub fn add_source(&mut self, path: PathBuf, flights: Vec<FlightRecord>) -> SourceId {
        let source = self.sources.len();
        self.sources.push(path);
        self.flights.extend(flights.into_iter().map(|mut flight| {
            flight.source = source;
            flight
        }));
        source
    }

    // Queries

    /// Distinct routes in order of first appearance.
    pub fn routes(&self) -> Vec<Route> {
        self.flights.iter().map(FlightRecord::route).unique().collect()
    }

    /// Flights owned by one source, in the order they were loaded.
    pub fn flights_for_source(&self, source: SourceId) -> Vec<&FlightRecord> {
        self.flights.iter().filter(|flight| flight.source == source).collect()
    }

    /// The lowest-priced free seat on `route`. On equal prices the first seat
    /// in load order wins.
    pub fn find_best_seat(&self, route: &Route) -> Option<BestSeat> {
        self.flights
            .iter()
            .enumerate()
            .filter(|(_, flight)| flight.serves(route))
            .flat_map(|(flight_index, flight)| {
                flight.seats.iter().enumerate().map(move |(seat_index, seat)| {
                    (SeatId::new(flight_index, seat_index), seat)
                })
            })
            .filter(|(_, seat)| seat.is_free())
            .min_by_key(|(_, seat)| seat.price)
            .map(|(id, seat)| BestSeat { id, price: seat.price })
    }

    pub fn free_seat_count(&self, route: &Route) -> usize {
        self.flights
            .iter()
            .filter(|flight| flight.serves(route))
            .map(FlightRecord::free_seat_count)
            .sum()
    }
}
