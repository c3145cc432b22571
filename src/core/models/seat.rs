use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Free,
    Booked,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatRecord {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub status: SeatStatus,
}

/// Position of a seat in the loaded inventory: the flight's index in load
/// order and the seat's index within that flight. Assigned at load time and
/// stable for the life of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    pub flight: usize,
    pub seat: usize,
}

impl SeatRecord {
    pub fn new(price: Decimal, status: SeatStatus) -> Self {
        Self { price, status }
    }

    pub fn free(price: Decimal) -> Self {
        Self::new(price, SeatStatus::Free)
    }

    pub fn is_free(&self) -> bool {
        self.status == SeatStatus::Free
    }

    pub fn book(&mut self) -> Result<(), &'static str> {
        if !self.is_free() {
            return Err("Seat is already booked");
        }
        self.status = SeatStatus::Booked;
        Ok(())
    }
}

impl SeatId {
    pub fn new(flight: usize, seat: usize) -> Self {
        Self { flight, seat }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flight #{} seat #{}", self.flight, self.seat)
    }
}
