use serde::{Serialize, Deserialize};

use super::{Route, SeatRecord};

/// Index of a source file in the inventory's source list.
pub type SourceId = usize;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    #[serde(rename = "from")]
    pub origin: i32,
    #[serde(rename = "to")]
    pub destination: i32,
    pub seats: Vec<SeatRecord>,
    #[serde(skip)]
    pub source: SourceId,
}

/// On-disk shape of one source file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SourceDocument {
    pub flights: Vec<FlightRecord>,
}

impl FlightRecord {
    pub fn new(origin: i32, destination: i32, seats: Vec<SeatRecord>, source: SourceId) -> Self {
        Self {
            origin,
            destination,
            seats,
            source,
        }
    }

    pub fn route(&self) -> Route {
        Route::new(self.origin, self.destination)
    }

    pub fn serves(&self, route: &Route) -> bool {
        self.origin == route.origin && self.destination == route.destination
    }

    pub fn free_seat_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_free()).count()
    }
}
