// src/commands/session.rs
use std::io::{BufRead, Write};
use log::{info, warn};

use crate::core::booking_system::BookingSystem;
use crate::core::errors::{BookingError, SessionError};
use crate::core::models::Route;
use crate::core::state::BestSeat;

#[derive(Debug, Clone, PartialEq)]
enum SessionState {
    ListRoutes,
    AwaitRouteChoice,
    ShowBestPrice(Route),
    AwaitPurchaseConfirm(BestSeat),
    AwaitName(BestSeat),
    AwaitPaymentConfirm { seat: BestSeat, name: String },
    AwaitRepeat,
    Finished,
}

/// What happened during a session, for the caller to report on exit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub bookings: usize,
    pub unsaved_bookings: usize,
}

/// Line-oriented booking dialogue. Reads answers from `input` and writes
/// prompts to `output`; end of input ends the session at any step.
pub struct Session<'a, R: BufRead, W: Write> {
    system: &'a mut BookingSystem,
    input: R,
    output: W,
    summary: SessionSummary,
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(system: &'a mut BookingSystem, input: R, output: W) -> Self {
        Self {
            system,
            input,
            output,
            summary: SessionSummary::default(),
        }
    }

    pub fn run(mut self) -> Result<SessionSummary, SessionError> {
        let mut state = SessionState::ListRoutes;
        while state != SessionState::Finished {
            state = self.step(state)?;
        }
        self.output.flush()?;
        Ok(self.summary)
    }

    fn step(&mut self, state: SessionState) -> Result<SessionState, SessionError> {
        let next = match state {
            SessionState::ListRoutes => {
                writeln!(self.output, "Available flights:")?;
                for route in self.system.routes() {
                    writeln!(self.output, "{}", route)?;
                }
                SessionState::AwaitRouteChoice
            }
            SessionState::AwaitRouteChoice => {
                writeln!(self.output, "Enter your flight choice (e.g., 1-2):")?;
                match self.read_answer()? {
                    None => SessionState::Finished,
                    Some(answer) => match answer.parse::<Route>() {
                        Ok(route) => SessionState::ShowBestPrice(route),
                        Err(e) => {
                            writeln!(self.output, "{}", e)?;
                            SessionState::AwaitRouteChoice
                        }
                    },
                }
            }
            SessionState::ShowBestPrice(route) => match self.system.find_best_seat(&route) {
                Some(seat) => {
                    writeln!(
                        self.output,
                        "Best price for your flight is ${}. Do you want to book it? (yes/no)",
                        seat.price
                    )?;
                    SessionState::AwaitPurchaseConfirm(seat)
                }
                None => {
                    writeln!(self.output, "No free seats available for route {}.", route)?;
                    SessionState::AwaitRepeat
                }
            },
            SessionState::AwaitPurchaseConfirm(seat) => match self.read_answer()? {
                None => SessionState::Finished,
                Some(answer) if is_yes(&answer) => SessionState::AwaitName(seat),
                Some(_) => SessionState::AwaitRepeat,
            },
            SessionState::AwaitName(seat) => {
                writeln!(self.output, "Enter your name:")?;
                match self.read_answer()? {
                    None => SessionState::Finished,
                    Some(name) => SessionState::AwaitPaymentConfirm { seat, name },
                }
            }
            SessionState::AwaitPaymentConfirm { seat, name } => {
                let keyword = self.system.config().payment_keyword.clone();
                writeln!(self.output, "Write '{}' to confirm payment:", keyword)?;
                match self.read_answer()? {
                    None => SessionState::Finished,
                    Some(answer) if answer.eq_ignore_ascii_case(&keyword) => {
                        self.confirm_booking(&seat, &name)?;
                        SessionState::AwaitRepeat
                    }
                    Some(_) => {
                        writeln!(self.output, "Booking cancelled.")?;
                        SessionState::AwaitRepeat
                    }
                }
            }
            SessionState::AwaitRepeat => {
                writeln!(self.output, "Do you want to perform another booking? (yes/no)")?;
                match self.read_answer()? {
                    Some(answer) if is_yes(&answer) => SessionState::ListRoutes,
                    _ => SessionState::Finished,
                }
            }
            SessionState::Finished => SessionState::Finished,
        };
        Ok(next)
    }

    fn confirm_booking(&mut self, seat: &BestSeat, name: &str) -> Result<(), SessionError> {
        match self.system.book_seat(seat.id) {
            Ok(()) => {
                info!("Ticket for {} booked by {}", seat.id, name);
                self.summary.bookings += 1;
                writeln!(self.output, "Ticket booked successfully for {}.", name)?;
            }
            Err(BookingError::Persistence(e)) => {
                warn!("Booking for {} is held in memory only: {}", name, e);
                self.summary.bookings += 1;
                self.summary.unsaved_bookings += 1;
                writeln!(
                    self.output,
                    "Ticket booked for {}, but the booking could not be saved yet: {}",
                    name, e
                )?;
            }
            Err(e) => {
                writeln!(self.output, "Seat is no longer available: {}", e)?;
            }
        }
        Ok(())
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_answer(&mut self) -> Result<Option<String>, SessionError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
